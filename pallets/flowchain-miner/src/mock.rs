use crate as pallet_flowchain_miner;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64},
    PalletId,
};
use pallet_flowchain_token::MintAuthority;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Ledger and issuance actor wired to each other, as a deployer would.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        FlowToken: pallet_flowchain_token,
        Miner: pallet_flowchain_miner,
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

pub const OWNER: u64 = 1;
pub const MULTISIG_WALLET: u64 = 100;
pub const ISSUANCE_CAP: u128 = 20_000;

parameter_types! {
    pub const MinerPalletId: PalletId = PalletId(*b"flc/mine");
    pub static Custodial: bool = true;
}

impl pallet_flowchain_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Settlement = Miner;
    type WeightInfo = ();
}

impl pallet_flowchain_miner::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Ledger = FlowToken;
    type PalletId = MinerPalletId;
    type IssuanceCap = ConstU128<ISSUANCE_CAP>;
    type CustodialIssuance = Custodial;
    type WeightInfo = ();
}

pub struct ExtBuilder {
    custodial: bool,
    install_miner: bool,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self { custodial: true, install_miner: true }
    }
}

impl ExtBuilder {
    pub fn custodial(mut self, custodial: bool) -> Self {
        self.custodial = custodial;
        self
    }

    /// Leave the ledger's mintable address on `OWNER` instead of the miner.
    pub fn without_miner_delegate(mut self) -> Self {
        self.install_miner = false;
        self
    }

    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

        let mintable_address = if self.install_miner { Miner::account_id() } else { OWNER };
        pallet_flowchain_token::GenesisConfig::<Test> {
            creator: Some(OWNER),
            funded_wallet: Some(MULTISIG_WALLET),
            mint_authority: MintAuthority::Delegate,
            mintable_address: Some(mintable_address),
            ..Default::default()
        }
        .assimilate_storage(&mut t)
        .unwrap();

        Custodial::set(self.custodial);
        let mut ext = sp_io::TestExternalities::new(t);
        ext.execute_with(|| System::set_block_number(1));
        ext
    }

    /// Run `test` and then check the invariants of both pallets.
    pub fn build_and_execute(self, test: impl FnOnce()) {
        self.build().execute_with(|| {
            test();
            FlowToken::do_try_state().expect("ledger invariant holds");
            Miner::do_try_state().expect("miner invariant holds");
        });
    }
}
