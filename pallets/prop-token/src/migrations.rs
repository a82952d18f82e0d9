//! Storage migrations for pallet-prop-token.
//!
//! Each migration is versioned against `STORAGE_VERSION` in `lib.rs` and runs
//! exactly once: the version gate makes re-runs a cheap no-op.
//!
//! To add a migration:
//!
//! 1. Increment `STORAGE_VERSION` in `lib.rs` (e.g., from 1 to 2)
//! 2. Add a `v2` module here with a `MigrateToV2` implementing
//!    `OnRuntimeUpgrade`
//! 3. Gate the body on `on_chain_storage_version() < 2` and bump the version
//!    after transforming storage
//! 4. Add tests for the gate and the transformation
//! 5. Wire the migration into the host runtime's `Executive` migration tuple
//!
//! A storage-shape change looks like:
//!
//! ```ignore
//! pub mod v2 {
//!     use super::*;
//!
//!     pub struct MigrateToV2<T>(PhantomData<T>);
//!
//!     impl<T: Config> OnRuntimeUpgrade for MigrateToV2<T> {
//!         fn on_runtime_upgrade() -> Weight {
//!             let current = Pallet::<T>::on_chain_storage_version();
//!             if current < 2 {
//!                 // e.g., replace the bool Blocklist entries with a struct
//!                 // carrying the block height the entry was set at
//!                 let mut count: u64 = 0;
//!                 for (account, _) in crate::Blocklist::<T>::drain() {
//!                     // insert into the replacement storage item
//!                     count += 1;
//!                 }
//!                 StorageVersion::new(2).put::<Pallet<T>>();
//!                 T::DbWeight::get().reads_writes(count + 1, count + 1)
//!             } else {
//!                 T::DbWeight::get().reads(1)
//!             }
//!         }
//!     }
//! }
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet};

/// Migration to version 1 (initial release).
///
/// v1 is the first storage version, so there is nothing to transform; the
/// migration only stamps the version. It doubles as the working template for
/// future migrations.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                log::info!(
                    target: "pallet-prop-token",
                    "Running migration v0 → v1 (no-op for initial release)"
                );

                StorageVersion::new(1).put::<Pallet<T>>();

                // 1 read (version check) + 1 write (version update)
                T::DbWeight::get().reads_writes(1, 1)
            } else {
                log::info!(
                    target: "pallet-prop-token",
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );

                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: "pallet-prop-token",
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );

            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
            }

            Ok(())
        }
    }
}
