#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are part of the public read API of the ledger.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Flowchain token ledger
//!
//! A permissioned fungible-token ledger. Each instance is constructed once with a
//! creator (its administrator), a [`TokenPolicy`] deciding the initial supply and a
//! [`MintAuthority`] deciding who may issue new tokens afterwards:
//!
//! - [`MintAuthority::OpenRegistry`]: the creator grants the minter role and any
//!   minter may `mint` or `burn`.
//! - [`MintAuthority::Delegate`]: a single mintable address, typically an issuance
//!   actor such as `pallet-flowchain-miner`, may `mint_token` while issuance is not
//!   paused.
//!
//! Every dispatchable checks all of its preconditions before the first storage
//! write, so a refused call leaves the ledger untouched. The sum of all balances
//! equals the total supply after every call; see [`Pallet::do_try_state`].

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::DispatchError;

pub use pallet::*;
pub use types::*;
pub use weights::WeightInfo;

mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::flowchain-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config<I: 'static = ()>: frame_system::Config {
        type RuntimeEvent: From<Event<Self, I>>
            + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Settles the off-ledger credit claimed through `withdraw`.
        type Settlement: WithdrawalSettlement<Self::AccountId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T, I = ()>(PhantomData<(T, I)>);

    /// Administrator recorded at construction. Never changes afterwards.
    #[pallet::storage]
    pub type Creator<T: Config<I>, I: 'static = ()> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Minting strategy selected at construction
    #[pallet::storage]
    #[pallet::getter(fn mint_authority)]
    pub type Authority<T: Config<I>, I: 'static = ()> =
        StorageValue<_, MintAuthority, ValueQuery>;

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T: Config<I>, I: 'static = ()> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config<I>, I: 'static = ()> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Accounts holding the minter role (open-registry ledgers only)
    #[pallet::storage]
    #[pallet::getter(fn is_minter)]
    pub type Minters<T: Config<I>, I: 'static = ()> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// The single address allowed to call `mint_token` (delegate ledgers only)
    #[pallet::storage]
    pub type MintableAddress<T: Config<I>, I: 'static = ()> =
        StorageValue<_, T::AccountId, OptionQuery>;

    /// When set, `mint_token` is refused
    #[pallet::storage]
    #[pallet::getter(fn issuance_paused)]
    pub type IssuancePaused<T: Config<I>, I: 'static = ()> = StorageValue<_, bool, ValueQuery>;

    /// Frozen accounts (cannot send transfers)
    #[pallet::storage]
    #[pallet::getter(fn is_frozen)]
    pub type Frozen<T: Config<I>, I: 'static = ()> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Smallest amount accepted by `withdraw`
    #[pallet::storage]
    #[pallet::getter(fn min_withdraw_amount)]
    pub type MinWithdrawAmount<T: Config<I>, I: 'static = ()> = StorageValue<_, u128, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config<I>, I: 'static = ()> {
        /// Ledger constructed with its administrator and initial supply
        LedgerConstructed { creator: T::AccountId, initial_supply: u128 },
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed
        Burned { from: T::AccountId, amount: u128 },
        /// Minter role granted
        MinterAdded { account: T::AccountId },
        /// Minter role revoked
        MinterRemoved { account: T::AccountId },
        /// Mintable address replaced
        MintableAddressSet { account: T::AccountId },
        /// `mint_token` disabled
        IssuancePaused,
        /// `mint_token` enabled
        IssuanceResumed,
        /// Account frozen (cannot send transfers)
        Frozen { account: T::AccountId },
        /// Account unfrozen
        Unfrozen { account: T::AccountId },
        /// Withdraw threshold changed
        MinWithdrawAmountSet { amount: u128 },
        /// Settled credit moved from its custody account to the claimant
        Withdrawn { who: T::AccountId, source: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T, I = ()> {
        /// Caller lacks the role or identity the call requires.
        Unauthorized,
        InsufficientBalance,
        AccountFrozen,
        /// Issuance through the mintable address is paused.
        IssuanceDisabled,
        /// Withdraw amount below the configured minimum.
        ThresholdNotMet,
        /// The call belongs to the other minting strategy.
        MintAuthorityMismatch,
        AlreadyConstructed,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config<I>, I: 'static> Hooks<BlockNumberFor<T>> for Pallet<T, I> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config<I>, I: 'static> Pallet<T, I> {
        /// Move `amount` from the caller to `to`. Frozen callers are refused; frozen
        /// recipients are not.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(!Frozen::<T, I>::get(&sender), Error::<T, I>::AccountFrozen);
            Self::move_balance(&sender, &to, amount)?;
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::add_minter())]
        pub fn add_minter(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_creator(origin)?;
            Self::ensure_authority(MintAuthority::OpenRegistry)?;
            Minters::<T, I>::insert(&account, true);
            Self::deposit_event(Event::MinterAdded { account });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::remove_minter())]
        pub fn remove_minter(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_creator(origin)?;
            Self::ensure_authority(MintAuthority::OpenRegistry)?;
            Minters::<T, I>::remove(&account);
            Self::deposit_event(Event::MinterRemoved { account });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_minter(origin)?;
            Self::increase_supply(&to, amount)?;
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, from: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_minter(origin)?;
            Self::decrease_supply(&from, amount)?;
            Self::deposit_event(Event::Burned { from, amount });
            Ok(())
        }

        /// Install `account` as the only address allowed to call `mint_token`,
        /// revoking the previous one.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::setup_mintable_address())]
        pub fn setup_mintable_address(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            Self::ensure_creator(origin)?;
            Self::ensure_authority(MintAuthority::Delegate)?;
            if let Some(previous) = MintableAddress::<T, I>::get() {
                log::debug!(
                    target: LOG_TARGET,
                    "mintable address {previous:?} replaced by {account:?}"
                );
            }
            MintableAddress::<T, I>::put(&account);
            Self::deposit_event(Event::MintableAddressSet { account });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::mint_token())]
        pub fn mint_token(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::do_mint_token(&caller, &to, amount)
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::pause_issuance())]
        pub fn pause_issuance(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_creator(origin)?;
            Self::ensure_authority(MintAuthority::Delegate)?;
            IssuancePaused::<T, I>::put(true);
            Self::deposit_event(Event::IssuancePaused);
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::resume_issuance())]
        pub fn resume_issuance(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_creator(origin)?;
            Self::ensure_authority(MintAuthority::Delegate)?;
            IssuancePaused::<T, I>::put(false);
            Self::deposit_event(Event::IssuanceResumed);
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::freeze_account())]
        pub fn freeze_account(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_creator(origin)?;
            Frozen::<T, I>::insert(&account, true);
            Self::deposit_event(Event::Frozen { account });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::unfreeze_account())]
        pub fn unfreeze_account(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_creator(origin)?;
            Frozen::<T, I>::remove(&account);
            Self::deposit_event(Event::Unfrozen { account });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::set_min_withdraw_amount())]
        pub fn set_min_withdraw_amount(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            Self::ensure_creator(origin)?;
            MinWithdrawAmount::<T, I>::put(amount);
            Self::deposit_event(Event::MinWithdrawAmountSet { amount });
            Ok(())
        }

        /// Claim `amount` of previously accrued off-ledger credit.
        ///
        /// The configured [`WithdrawalSettlement`] names the custody account backing
        /// the credit; the funds move from there to the caller and the credit is
        /// consumed. Total supply is unchanged.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::withdraw())]
        pub fn withdraw(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(amount >= MinWithdrawAmount::<T, I>::get(), Error::<T, I>::ThresholdNotMet);
            let source = T::Settlement::custody_of(&who, amount)?;
            let moved = Self::moved_balances(&source, &who, amount)?;

            T::Settlement::settle(&who, amount)?;
            if let Some((source_balance, who_balance)) = moved {
                Balances::<T, I>::insert(&source, source_balance);
                Balances::<T, I>::insert(&who, who_balance);
            }
            Self::deposit_event(Event::Withdrawn { who, source, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config<I>, I: 'static = ()> {
        /// Ledger administrator. The ledger is left unconstructed when absent.
        pub creator: Option<T::AccountId>,
        /// Wallet receiving the pre-funded supply; zero supply when absent
        pub funded_wallet: Option<T::AccountId>,
        pub mint_authority: MintAuthority,
        /// Initial mintable address (delegate ledgers only)
        pub mintable_address: Option<T::AccountId>,
        pub issuance_paused: bool,
        pub min_withdraw_amount: u128,
        #[serde(skip)]
        pub phantom: PhantomData<I>,
    }

    #[pallet::genesis_build]
    impl<T: Config<I>, I: 'static> BuildGenesisConfig for GenesisConfig<T, I> {
        fn build(&self) {
            let Some(creator) = self.creator.clone() else {
                return;
            };
            let policy = match self.funded_wallet.clone() {
                Some(wallet) => TokenPolicy::PreFunded { wallet },
                None => TokenPolicy::ZeroSupply,
            };
            Pallet::<T, I>::construct(creator, policy, self.mint_authority)
                .expect("genesis constructs the ledger exactly once");

            if let Some(ref delegate) = self.mintable_address {
                assert!(
                    self.mint_authority == MintAuthority::Delegate,
                    "mintable address requires a delegate ledger"
                );
                MintableAddress::<T, I>::put(delegate);
            }
            IssuancePaused::<T, I>::put(self.issuance_paused);
            MinWithdrawAmount::<T, I>::put(self.min_withdraw_amount);
        }
    }
}

impl<T: Config<I>, I: 'static> Pallet<T, I> {
    /// Construct the ledger: record `creator`, fix the minting strategy and allocate
    /// the initial supply according to `policy`. Fails if already constructed.
    pub fn construct(
        creator: T::AccountId,
        policy: TokenPolicy<T::AccountId>,
        authority: MintAuthority,
    ) -> DispatchResult {
        ensure!(!Creator::<T, I>::exists(), Error::<T, I>::AlreadyConstructed);

        let allocation = policy.initial_allocation();
        let initial_supply = allocation.as_ref().map_or(0, |(_, amount)| *amount);
        if let Some((wallet, amount)) = allocation {
            Self::increase_supply(&wallet, amount)?;
        }
        Creator::<T, I>::put(&creator);
        Authority::<T, I>::put(authority);

        log::info!(
            target: LOG_TARGET,
            "ledger constructed by {creator:?} ({authority:?}, initial supply {initial_supply})"
        );
        Self::deposit_event(Event::LedgerConstructed { creator, initial_supply });
        Ok(())
    }

    pub fn creator() -> Option<T::AccountId> {
        Creator::<T, I>::get()
    }

    pub fn mintable_address() -> Option<T::AccountId> {
        MintableAddress::<T, I>::get()
    }

    /// Delegate mint path shared by the `mint_token` call and [`DelegatedIssuance`].
    pub fn do_mint_token(caller: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_authority(MintAuthority::Delegate)?;
        if MintableAddress::<T, I>::get().as_ref() != Some(caller) {
            log::warn!(target: LOG_TARGET, "mint_token refused for {caller:?}: not the mintable address");
            return Err(Error::<T, I>::Unauthorized.into());
        }
        ensure!(!IssuancePaused::<T, I>::get(), Error::<T, I>::IssuanceDisabled);

        Self::increase_supply(to, amount)?;
        Self::deposit_event(Event::Minted { to: to.clone(), amount });
        Ok(())
    }

    /// Check that the sum of all balances equals the total supply.
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let sum = Balances::<T, I>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or(sp_runtime::TryRuntimeError::Other("sum of balances overflows"))?;
        ensure!(
            sum == TotalSupply::<T, I>::get(),
            sp_runtime::TryRuntimeError::Other("sum of balances differs from total supply")
        );
        Ok(())
    }

    fn ensure_creator(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Creator::<T, I>::get().as_ref() == Some(&who), Error::<T, I>::Unauthorized);
        Ok(who)
    }

    fn ensure_minter(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        Self::ensure_authority(MintAuthority::OpenRegistry)?;
        ensure!(Minters::<T, I>::get(&who), Error::<T, I>::Unauthorized);
        Ok(who)
    }

    fn ensure_authority(expected: MintAuthority) -> DispatchResult {
        ensure!(Authority::<T, I>::get() == expected, Error::<T, I>::MintAuthorityMismatch);
        Ok(())
    }

    /// Balances of `from` and `to` after moving `amount`, or `None` when both are
    /// the same account.
    fn moved_balances(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> Result<Option<(u128, u128)>, DispatchError> {
        let from_balance = Balances::<T, I>::get(from);
        ensure!(from_balance >= amount, Error::<T, I>::InsufficientBalance);
        if from == to {
            return Ok(None);
        }
        let to_balance =
            Balances::<T, I>::get(to).checked_add(amount).ok_or(Error::<T, I>::Overflow)?;
        Ok(Some((from_balance - amount, to_balance)))
    }

    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        if let Some((from_balance, to_balance)) = Self::moved_balances(from, to, amount)? {
            Balances::<T, I>::insert(from, from_balance);
            Balances::<T, I>::insert(to, to_balance);
        }
        Ok(())
    }

    fn increase_supply(to: &T::AccountId, amount: u128) -> DispatchResult {
        let supply = TotalSupply::<T, I>::get().checked_add(amount).ok_or(Error::<T, I>::Overflow)?;
        let balance = Balances::<T, I>::get(to).checked_add(amount).ok_or(Error::<T, I>::Overflow)?;

        TotalSupply::<T, I>::put(supply);
        Balances::<T, I>::insert(to, balance);
        Ok(())
    }

    fn decrease_supply(from: &T::AccountId, amount: u128) -> DispatchResult {
        let balance = Balances::<T, I>::get(from);
        ensure!(balance >= amount, Error::<T, I>::InsufficientBalance);
        let supply = TotalSupply::<T, I>::get().checked_sub(amount).ok_or(Error::<T, I>::Overflow)?;

        TotalSupply::<T, I>::put(supply);
        Balances::<T, I>::insert(from, balance - amount);
        Ok(())
    }
}

impl<T: Config<I>, I: 'static> DelegatedIssuance<T::AccountId> for Pallet<T, I> {
    fn mint_as_delegate(caller: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::do_mint_token(caller, to, amount)
    }

    fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T, I>::get(who)
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn install_delegate(delegate: &T::AccountId) {
        Authority::<T, I>::put(MintAuthority::Delegate);
        MintableAddress::<T, I>::put(delegate);
        IssuancePaused::<T, I>::put(false);
    }
}
