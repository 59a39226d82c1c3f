#![cfg_attr(not(feature = "std"), no_std)]
#![allow(deprecated)]

//! # Flowchain miner
//!
//! An issuance actor that mints into a token ledger under its own cumulative cap.
//! The ledger must have this pallet's account (derived from `PalletId`) installed
//! as its mintable address; the ledger re-checks that on every mint, so the actor
//! cannot issue anything the ledger has not authorised.
//!
//! In custodial mode the issued tokens are kept in the actor's account and credited
//! to the beneficiary, who claims them later through the ledger's `withdraw`. This
//! pallet settles those claims by implementing [`WithdrawalSettlement`].

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, PalletId};
use frame_system::{ensure_signed, pallet_prelude::*};
use pallet_flowchain_token::{DelegatedIssuance, WithdrawalSettlement};
use sp_runtime::{traits::AccountIdConversion, DispatchError};

pub use pallet::*;
pub use weights::WeightInfo;

pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::flowchain-miner";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Ledger this actor issues into.
        type Ledger: DelegatedIssuance<Self::AccountId>;

        /// Identifier the actor's ledger account is derived from.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Upper bound on everything this actor will ever issue.
        #[pallet::constant]
        type IssuanceCap: Get<u128>;

        /// Keep issued tokens in the actor's account and credit the beneficiary,
        /// instead of minting straight to the beneficiary.
        #[pallet::constant]
        type CustodialIssuance: Get<bool>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Cumulative amount issued so far
    #[pallet::storage]
    #[pallet::getter(fn issued_total)]
    pub type IssuedTotal<T> = StorageValue<_, u128, ValueQuery>;

    /// Issued but not yet withdrawn tokens per beneficiary (custodial mode)
    #[pallet::storage]
    #[pallet::getter(fn credit_of)]
    pub type Credits<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens issued for a beneficiary
        Issued { to: T::AccountId, amount: u128, issued_total: u128 },
        /// Custodied credit released to the ledger's `withdraw`
        CreditSettled { who: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Issuing would push the cumulative total past the cap.
        CapExceeded,
        /// Withdraw amount exceeds the beneficiary's custodied credit.
        InsufficientCredit,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Issue `amount` for `to` through the ledger's delegate mint path.
        ///
        /// Nothing is issued unless the whole amount fits under the cap and the
        /// ledger accepts this actor as its mintable address.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::issue())]
        pub fn issue(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            ensure_signed(origin)?;

            let cap = T::IssuanceCap::get();
            let issued_total = IssuedTotal::<T>::get()
                .checked_add(amount)
                .filter(|total| *total <= cap)
                .ok_or_else(|| {
                    log::warn!(
                        target: LOG_TARGET,
                        "issue of {amount} refused: {} of {cap} already issued",
                        IssuedTotal::<T>::get()
                    );
                    Error::<T>::CapExceeded
                })?;

            let actor = Self::account_id();
            let custodial = T::CustodialIssuance::get();
            let recipient = if custodial { actor.clone() } else { to.clone() };
            T::Ledger::mint_as_delegate(&actor, &recipient, amount)?;

            if custodial {
                Credits::<T>::mutate(&to, |credit| *credit = credit.saturating_add(amount));
            }
            IssuedTotal::<T>::put(issued_total);

            log::debug!(target: LOG_TARGET, "issued {amount} for {to:?}, total {issued_total}");
            Self::deposit_event(Event::Issued { to, amount, issued_total });
            Ok(())
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Ledger-side address of this actor. Install it as the ledger's mintable
    /// address to enable issuance.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn remaining_issuance() -> u128 {
        T::IssuanceCap::get().saturating_sub(IssuedTotal::<T>::get())
    }

    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let issued = IssuedTotal::<T>::get();
        ensure!(
            issued <= T::IssuanceCap::get(),
            sp_runtime::TryRuntimeError::Other("issued total exceeds the cap")
        );

        let credited = Credits::<T>::iter_values().fold(0u128, |acc, credit| acc.saturating_add(credit));
        ensure!(
            credited <= issued,
            sp_runtime::TryRuntimeError::Other("custodied credit exceeds issued total")
        );
        if T::CustodialIssuance::get() {
            ensure!(
                T::Ledger::balance_of(&Self::account_id()) >= credited,
                sp_runtime::TryRuntimeError::Other("custody balance does not cover credit")
            );
        }
        Ok(())
    }
}

impl<T: Config> WithdrawalSettlement<T::AccountId> for Pallet<T> {
    fn custody_of(who: &T::AccountId, amount: u128) -> Result<T::AccountId, DispatchError> {
        ensure!(Credits::<T>::get(who) >= amount, Error::<T>::InsufficientCredit);
        Ok(Self::account_id())
    }

    fn settle(who: &T::AccountId, amount: u128) -> DispatchResult {
        // Fully withdrawn credit leaves no entry behind
        Credits::<T>::try_mutate_exists(who, |credit| -> DispatchResult {
            let remaining = credit
                .unwrap_or_default()
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientCredit)?;
            *credit = (remaining > 0).then_some(remaining);
            Ok(())
        })?;
        Self::deposit_event(Event::CreditSettled { who: who.clone(), amount });
        Ok(())
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn credit_for_benchmark(who: &T::AccountId, amount: u128) -> Option<T::AccountId> {
        Credits::<T>::mutate(who, |credit| *credit = credit.saturating_add(amount));
        Some(Self::account_id())
    }
}
