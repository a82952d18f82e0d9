//! Benchmarking setup for pallet-prop-token

use super::*;

#[allow(unused)]
use crate::Pallet as PropToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Balances::<T>::insert(&caller, 10_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000u128);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000u128);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000u128);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        Balances::<T>::insert(&holder, 10_000_000u128);
        Allowances::<T>::insert(&holder, &spender, 5_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), holder.clone(), recipient.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000u128);
        assert_eq!(Allowances::<T>::get(&holder, &spender), 4_000_000u128);
    }

    #[benchmark]
    fn grant_role() {
        let caller: T::AccountId = whitelisted_caller();
        let grantee: T::AccountId = account("grantee", 0, 0);
        Roles::<T>::insert(Role::SuperAdmin, &caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), Role::Admin, grantee.clone());

        assert_eq!(Roles::<T>::get(Role::Admin, &grantee), true);
    }

    #[benchmark]
    fn revoke_role() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        Roles::<T>::insert(Role::SuperAdmin, &caller, true);
        Roles::<T>::insert(Role::Admin, &holder, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), Role::Admin, holder.clone());

        assert_eq!(Roles::<T>::get(Role::Admin, &holder), false);
    }

    #[benchmark]
    fn change_blocklist() {
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        Roles::<T>::insert(Role::Admin, &caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), target.clone(), true);

        assert_eq!(Blocklist::<T>::get(&target), true);
    }

    #[benchmark]
    fn change_whitelist() {
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        Roles::<T>::insert(Role::Admin, &caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), target.clone(), true);

        assert_eq!(Whitelist::<T>::get(&target), true);
    }

    #[benchmark]
    fn pause() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Admin, &caller, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let caller: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Admin, &caller, true);
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()));

        assert_eq!(Paused::<T>::get(), false);
    }

    #[benchmark]
    fn set_new_owner() {
        let caller: T::AccountId = whitelisted_caller();
        let successor: T::AccountId = account("successor", 0, 0);
        Owner::<T>::put(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), successor.clone());

        assert_eq!(Owner::<T>::get(), Some(successor));
    }

    impl_benchmark_test_suite!(PropToken, crate::mock::new_test_ext(), crate::mock::Test);
}
