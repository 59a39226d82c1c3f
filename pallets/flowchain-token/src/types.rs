//! Construction policies and the capability traits other pallets use to reach the ledger.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_runtime::{DispatchError, DispatchResult, RuntimeDebug};

/// Number of decimal places of the token unit.
pub const DECIMALS: u8 = 18;

/// Supply credited to the funded wallet under [`TokenPolicy::PreFunded`]:
/// one billion whole tokens.
pub const PREFUNDED_SUPPLY: u128 = 1_000_000_000 * 10u128.pow(DECIMALS as u32);

/// Who may create new supply on a ledger. Fixed when the ledger is constructed.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Encode,
    Decode,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MintAuthority {
    /// Any account added through `add_minter` may `mint` and `burn`.
    #[default]
    OpenRegistry,
    /// Only the single mintable address may call `mint_token`.
    Delegate,
}

/// How the initial supply is allocated at construction.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub enum TokenPolicy<AccountId> {
    /// The ledger starts empty.
    ZeroSupply,
    /// [`PREFUNDED_SUPPLY`] is credited to `wallet`, independent of the creator.
    PreFunded { wallet: AccountId },
}

impl<AccountId> TokenPolicy<AccountId> {
    pub fn initial_allocation(self) -> Option<(AccountId, u128)> {
        match self {
            TokenPolicy::ZeroSupply => None,
            TokenPolicy::PreFunded { wallet } => Some((wallet, PREFUNDED_SUPPLY)),
        }
    }
}

/// Mint path used by an external issuance actor that has been installed as the
/// ledger's mintable address.
///
/// The ledger checks `caller` against its stored delegate on every call; holding a
/// reference to this trait grants nothing by itself.
pub trait DelegatedIssuance<AccountId> {
    /// Mint `amount` to `to` on behalf of `caller`.
    fn mint_as_delegate(caller: &AccountId, to: &AccountId, amount: u128) -> DispatchResult;

    /// Current ledger balance of `who`.
    fn balance_of(who: &AccountId) -> u128;

    /// Turn the ledger into a delegate ledger with `delegate` installed and
    /// issuance resumed.
    #[cfg(feature = "runtime-benchmarks")]
    fn install_delegate(_delegate: &AccountId) {}
}

/// Off-ledger credit settlement invoked by `withdraw`.
///
/// `withdraw` calls [`Self::custody_of`] first and [`Self::settle`] only once every
/// ledger-side check has passed, so a refused withdraw never consumes credit.
pub trait WithdrawalSettlement<AccountId> {
    /// Ledger account holding the funds that back `amount` of `who`'s accrued
    /// credit. Must not modify state; fails when the credit does not cover `amount`.
    fn custody_of(who: &AccountId, amount: u128) -> Result<AccountId, DispatchError>;

    /// Consume `amount` of `who`'s credit.
    fn settle(who: &AccountId, amount: u128) -> DispatchResult;

    /// Grant `who` withdrawable credit of `amount` and return its custody account,
    /// or `None` when this settlement cannot create credit on demand.
    #[cfg(feature = "runtime-benchmarks")]
    fn credit_for_benchmark(_who: &AccountId, _amount: u128) -> Option<AccountId> {
        None
    }
}

impl<AccountId> WithdrawalSettlement<AccountId> for () {
    fn custody_of(_who: &AccountId, _amount: u128) -> Result<AccountId, DispatchError> {
        Err(DispatchError::Unavailable)
    }

    fn settle(_who: &AccountId, _amount: u128) -> DispatchResult {
        Err(DispatchError::Unavailable)
    }
}
