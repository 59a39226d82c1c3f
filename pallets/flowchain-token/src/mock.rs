use crate as pallet_flowchain_token;
use crate::{MintAuthority, WithdrawalSettlement};
use frame_support::{
    derive_impl, ensure,
    instances::Instance1,
    parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, DispatchError, DispatchResult,
};
use sp_std::collections::btree_map::BTreeMap;

type Block = frame_system::mocking::MockBlock<Test>;

// Two independent ledgers in one runtime: an open-registry token and a
// delegate-mint token using the default instance.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        DexToken: pallet_flowchain_token::<Instance1>,
        FlowToken: pallet_flowchain_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

/// Ledger administrator of both tokens.
pub const OWNER: u64 = 1;
/// Wallet receiving the pre-funded supply of `FlowToken`.
pub const MULTISIG_WALLET: u64 = 100;
/// Custody account backing withdrawable credit.
pub const RESERVE: u64 = 50;

parameter_types! {
    /// Off-ledger credit per account, consumed by `withdraw`.
    pub static Credits: BTreeMap<u64, u128> = BTreeMap::new();
}

/// Settlement backed by [`Credits`], with every credit held by [`RESERVE`].
pub struct MockSettlement;
impl WithdrawalSettlement<u64> for MockSettlement {
    fn custody_of(who: &u64, amount: u128) -> Result<u64, DispatchError> {
        let credit = Credits::get().get(who).copied().unwrap_or_default();
        ensure!(credit >= amount, DispatchError::Other("insufficient credit"));
        Ok(RESERVE)
    }

    fn settle(who: &u64, amount: u128) -> DispatchResult {
        let mut credits = Credits::get();
        let credit = credits.entry(*who).or_default();
        *credit = credit.checked_sub(amount).ok_or(DispatchError::Other("insufficient credit"))?;
        Credits::set(credits);
        Ok(())
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn credit_for_benchmark(who: &u64, amount: u128) -> Option<u64> {
        grant_credit(*who, amount);
        Some(RESERVE)
    }
}

pub fn grant_credit(who: u64, amount: u128) {
    let mut credits = Credits::get();
    *credits.entry(who).or_default() += amount;
    Credits::set(credits);
}

impl pallet_flowchain_token::Config<Instance1> for Test {
    type RuntimeEvent = RuntimeEvent;
    type Settlement = ();
    type WeightInfo = ();
}

impl pallet_flowchain_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Settlement = MockSettlement;
    type WeightInfo = ();
}

fn build_storage(construct: bool) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    if construct {
        pallet_flowchain_token::GenesisConfig::<Test, Instance1> {
            creator: Some(OWNER),
            mint_authority: MintAuthority::OpenRegistry,
            ..Default::default()
        }
        .assimilate_storage(&mut t)
        .unwrap();

        pallet_flowchain_token::GenesisConfig::<Test> {
            creator: Some(OWNER),
            funded_wallet: Some(MULTISIG_WALLET),
            mint_authority: MintAuthority::Delegate,
            mintable_address: Some(OWNER),
            ..Default::default()
        }
        .assimilate_storage(&mut t)
        .unwrap();
    }

    Credits::set(BTreeMap::new());
    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

// Build genesis storage with both ledgers constructed by `OWNER`.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_storage(true)
}

// Ledgers exist in the runtime but nobody has constructed them yet.
pub fn unconstructed_ext() -> sp_io::TestExternalities {
    build_storage(false)
}

/// Run `test` and then check the supply invariant of both ledgers.
pub fn build_and_execute(test: impl FnOnce()) {
    new_test_ext().execute_with(|| {
        test();
        DexToken::do_try_state().expect("dex ledger invariant holds");
        FlowToken::do_try_state().expect("flow ledger invariant holds");
    });
}
