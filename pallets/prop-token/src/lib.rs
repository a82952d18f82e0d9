#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters stay until call sites move to direct storage access
#![allow(deprecated)]

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use scale_info::TypeInfo;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod migrations;
pub mod policy;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Administrative capability tiers.
///
/// `SuperAdmin` administers both roles (including itself); `Admin` gates the
/// transfer-policy mutations. The set is closed: no runtime role creation.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
)]
pub enum Role {
    /// Root role. Grants and revokes all role membership.
    SuperAdmin,
    /// Operational role. Mutates pause, blocklist and whitelist state.
    Admin,
}

impl Role {
    /// The role whose holders may grant or revoke `self`.
    pub fn admin_role(self) -> Role {
        match self {
            Role::SuperAdmin => Role::SuperAdmin,
            Role::Admin => Role::SuperAdmin,
        }
    }
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Weight information for extrinsics in this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "PROP TOKEN")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "PROP")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Set once at genesis, never mutated afterwards.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances: (token holder, spender) -> remaining amount
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Role membership: (role, account) -> held
    #[pallet::storage]
    #[pallet::getter(fn has_role)]
    pub type Roles<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        Role,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    /// Global pause flag. While set, only whitelisted parties move value.
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Accounts barred from sending or receiving, regardless of pause state
    #[pallet::storage]
    #[pallet::getter(fn blocklist)]
    pub type Blocklist<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Accounts exempt from the pause restriction
    #[pallet::storage]
    #[pallet::getter(fn whitelist)]
    pub type Whitelist<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// The owner identity. Distinct from role membership; gates only
    /// `set_new_owner`.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance set to a new value (overwrite, not increment)
        Approved { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Role granted to an account
        RoleGranted { role: Role, account: T::AccountId },
        /// Role revoked from an account
        RoleRevoked { role: Role, account: T::AccountId },
        /// Blocklist membership changed for an account
        BlocklistUpdated { account: T::AccountId, blocklisted: bool },
        /// Whitelist membership changed for an account
        WhitelistUpdated { account: T::AccountId, whitelisted: bool },
        /// Transfers suspended
        Paused,
        /// Transfers resumed
        Unpaused,
        /// Owner identity reassigned
        OwnerChanged { old_owner: Option<T::AccountId>, new_owner: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Debit exceeds the account balance.
        InsufficientBalance,
        /// Allowance-based debit exceeds the remaining allowance.
        InsufficientAllowance,
        /// Caller lacks the required role or identity.
        Unauthorized,
        /// A transfer participant is blocklisted.
        Blocklisted,
        /// Transfers are paused and no participant is whitelisted.
        Paused,
        /// Arithmetic overflow on a credit path.
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            Self::ensure_transfer_allowed(&from, &to)?;
            Self::do_transfer(&from, &to, amount)
        }

        /// Set the allowance of `spender` over the caller's balance.
        /// Overwrites any previous allowance; approving zero clears it.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        /// Move `amount` from `from` to `to` on the strength of an allowance
        /// previously approved to the caller.
        ///
        /// The allowance check runs before the policy check, so an
        /// over-allowance request fails with `InsufficientAllowance` even
        /// while paused or blocklisted. Nothing is written until every check
        /// has passed: a denied transfer leaves the allowance untouched.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;
            Self::ensure_transfer_allowed(&from, &to)?;
            Self::do_transfer(&from, &to, amount)?;
            Allowances::<T>::insert(&from, &spender, remaining);
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(role.admin_role(), &caller)?;
            Roles::<T>::insert(role, &account, true);
            Self::deposit_event(Event::RoleGranted { role, account });
            Ok(())
        }

        /// Revoke `role` from `account`.
        ///
        /// No self-revocation guard: a `SuperAdmin` revoking its own role can
        /// leave the registry without any `SuperAdmin`, permanently freezing
        /// role administration.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(role.admin_role(), &caller)?;
            Roles::<T>::remove(role, &account);
            Self::deposit_event(Event::RoleRevoked { role, account });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::change_blocklist())]
        pub fn change_blocklist(
            origin: OriginFor<T>,
            account: T::AccountId,
            blocklisted: bool,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &caller)?;
            if blocklisted {
                Blocklist::<T>::insert(&account, true);
            } else {
                Blocklist::<T>::remove(&account);
            }
            Self::deposit_event(Event::BlocklistUpdated { account, blocklisted });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::change_whitelist())]
        pub fn change_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
            whitelisted: bool,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &caller)?;
            if whitelisted {
                Whitelist::<T>::insert(&account, true);
            } else {
                Whitelist::<T>::remove(&account);
            }
            Self::deposit_event(Event::WhitelistUpdated { account, whitelisted });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &caller)?;
            Paused::<T>::put(true);
            Self::deposit_event(Event::Paused);
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_role(Role::Admin, &caller)?;
            Paused::<T>::put(false);
            Self::deposit_event(Event::Unpaused);
            Ok(())
        }

        /// Reassign the owner identity. Only the current owner may call this;
        /// role membership gives no override.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::set_new_owner())]
        pub fn set_new_owner(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            let old_owner = Owner::<T>::get();
            ensure!(old_owner.as_ref() == Some(&caller), Error::<T>::Unauthorized);
            Owner::<T>::put(&new_owner);
            Self::deposit_event(Event::OwnerChanged { old_owner, new_owner });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// The role whose holders administer `role`.
        pub fn role_admin(role: Role) -> Role {
            role.admin_role()
        }

        fn ensure_role(role: Role, who: &T::AccountId) -> DispatchResult {
            ensure!(Roles::<T>::get(role, who), Error::<T>::Unauthorized);
            Ok(())
        }

        fn account_status(who: &T::AccountId) -> policy::AccountStatus {
            policy::AccountStatus {
                blocklisted: Blocklist::<T>::get(who),
                whitelisted: Whitelist::<T>::get(who),
            }
        }

        fn ensure_transfer_allowed(
            sender: &T::AccountId,
            recipient: &T::AccountId,
        ) -> DispatchResult {
            let verdict = policy::authorize(
                Paused::<T>::get(),
                &Self::account_status(sender),
                &Self::account_status(recipient),
            );
            match verdict {
                policy::Verdict::Allow => Ok(()),
                policy::Verdict::Deny(policy::DenyReason::Blocklisted) => {
                    Err(Error::<T>::Blocklisted.into())
                }
                policy::Verdict::Deny(policy::DenyReason::Paused) => {
                    Err(Error::<T>::Paused.into())
                }
            }
        }

        // Both legs are computed before either write, so a failing credit
        // cannot leave a dangling debit behind.
        fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
            if from == to {
                // Net-zero move; the balance check still applies
                ensure!(Balances::<T>::get(from) >= amount, Error::<T>::InsufficientBalance);
            } else {
                let debited = Balances::<T>::get(from)
                    .checked_sub(amount)
                    .ok_or(Error::<T>::InsufficientBalance)?;
                let credited = Balances::<T>::get(to)
                    .checked_add(amount)
                    .ok_or(Error::<T>::Overflow)?;
                Balances::<T>::insert(from, debited);
                Balances::<T>::insert(to, credited);
            }
            Self::deposit_event(Event::Transferred {
                from: from.clone(),
                to: to.clone(),
                amount,
            });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Account receiving the entire supply, the `SuperAdmin` role and the
        /// owner identity
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Fixed total supply, minted in full to `owner`
        pub initial_supply: u128,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref owner) = self.owner {
                Balances::<T>::insert(owner, self.initial_supply);
                TotalSupply::<T>::put(self.initial_supply);
                Roles::<T>::insert(Role::SuperAdmin, owner, true);
                Owner::<T>::put(owner);
            }
        }
    }
}
