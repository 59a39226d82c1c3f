//! Benchmarking setup for pallet-flowchain-miner

use super::*;

#[allow(unused)]
use crate::Pallet as Miner;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    // Worst case is custodial issuance, which also writes the beneficiary's credit.
    #[benchmark]
    fn issue() {
        T::Ledger::install_delegate(&Miner::<T>::account_id());
        let caller: T::AccountId = whitelisted_caller();
        let beneficiary: T::AccountId = account("beneficiary", 0, 0);
        let amount = Miner::<T>::remaining_issuance();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), beneficiary, amount);

        assert_eq!(IssuedTotal::<T>::get(), T::IssuanceCap::get());
    }

    impl_benchmark_test_suite!(Miner, crate::mock::ExtBuilder::default().build(), crate::mock::Test);
}
