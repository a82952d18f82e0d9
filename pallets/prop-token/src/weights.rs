//! Weight information for pallet-prop-token extrinsics.
//!
//! Placeholder constants until generated weights land via
//! `frame-benchmarking`; see `benchmarking.rs`.

use frame_support::weights::Weight;

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn grant_role() -> Weight;
    fn revoke_role() -> Weight;
    fn change_blocklist() -> Weight;
    fn change_whitelist() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn set_new_owner() -> Weight;
}

impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn approve() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn grant_role() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn revoke_role() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn change_blocklist() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn change_whitelist() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn pause() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn unpause() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn set_new_owner() -> Weight {
        Weight::from_parts(10_000, 0)
    }
}
