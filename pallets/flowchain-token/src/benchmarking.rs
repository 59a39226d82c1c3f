//! Benchmarking setup for pallet-flowchain-token

use super::*;

#[allow(unused)]
use crate::Pallet as FlowchainToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn setup_ledger<T: Config<I>, I: 'static>(authority: MintAuthority) -> T::AccountId {
    let creator: T::AccountId = whitelisted_caller();
    Creator::<T, I>::put(&creator);
    Authority::<T, I>::put(authority);
    creator
}

fn fund<T: Config<I>, I: 'static>(who: &T::AccountId, amount: u128) {
    Balances::<T, I>::mutate(who, |balance| *balance += amount);
    TotalSupply::<T, I>::mutate(|supply| *supply += amount);
}

#[instance_benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        fund::<T, I>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T, I>::get(&recipient), amount);
    }

    #[benchmark]
    fn add_minter() {
        let creator = setup_ledger::<T, I>(MintAuthority::OpenRegistry);
        let minter: T::AccountId = account("minter", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator), minter.clone());

        assert!(Minters::<T, I>::get(&minter));
    }

    #[benchmark]
    fn remove_minter() {
        let creator = setup_ledger::<T, I>(MintAuthority::OpenRegistry);
        let minter: T::AccountId = account("minter", 0, 0);
        Minters::<T, I>::insert(&minter, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator), minter.clone());

        assert!(!Minters::<T, I>::get(&minter));
    }

    #[benchmark]
    fn mint() {
        let creator = setup_ledger::<T, I>(MintAuthority::OpenRegistry);
        Minters::<T, I>::insert(&creator, true);
        let recipient: T::AccountId = account("recipient", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T, I>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn burn() {
        let creator = setup_ledger::<T, I>(MintAuthority::OpenRegistry);
        Minters::<T, I>::insert(&creator, true);
        let holder: T::AccountId = account("holder", 0, 0);
        fund::<T, I>(&holder, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator), holder.clone(), 1_000_000);

        assert_eq!(Balances::<T, I>::get(&holder), 0);
    }

    #[benchmark]
    fn setup_mintable_address() {
        let creator = setup_ledger::<T, I>(MintAuthority::Delegate);
        let delegate: T::AccountId = account("delegate", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator), delegate.clone());

        assert_eq!(MintableAddress::<T, I>::get(), Some(delegate));
    }

    #[benchmark]
    fn mint_token() {
        let creator = setup_ledger::<T, I>(MintAuthority::Delegate);
        MintableAddress::<T, I>::put(&creator);
        IssuancePaused::<T, I>::put(false);
        let recipient: T::AccountId = account("recipient", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator), recipient.clone(), 5_000);

        assert_eq!(Balances::<T, I>::get(&recipient), 5_000);
    }

    #[benchmark]
    fn pause_issuance() {
        let creator = setup_ledger::<T, I>(MintAuthority::Delegate);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator));

        assert!(IssuancePaused::<T, I>::get());
    }

    #[benchmark]
    fn resume_issuance() {
        let creator = setup_ledger::<T, I>(MintAuthority::Delegate);
        IssuancePaused::<T, I>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator));

        assert!(!IssuancePaused::<T, I>::get());
    }

    #[benchmark]
    fn freeze_account() {
        let creator = setup_ledger::<T, I>(MintAuthority::Delegate);
        let target: T::AccountId = account("target", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator), target.clone());

        assert!(Frozen::<T, I>::get(&target));
    }

    #[benchmark]
    fn unfreeze_account() {
        let creator = setup_ledger::<T, I>(MintAuthority::Delegate);
        let target: T::AccountId = account("target", 0, 0);
        Frozen::<T, I>::insert(&target, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator), target.clone());

        assert!(!Frozen::<T, I>::get(&target));
    }

    #[benchmark]
    fn set_min_withdraw_amount() {
        let creator = setup_ledger::<T, I>(MintAuthority::Delegate);

        #[extrinsic_call]
        _(RawOrigin::Signed(creator), 10);

        assert_eq!(MinWithdrawAmount::<T, I>::get(), 10);
    }

    #[benchmark]
    fn withdraw() -> Result<(), BenchmarkError> {
        let caller: T::AccountId = whitelisted_caller();
        let amount = MinWithdrawAmount::<T, I>::get().max(1_000);
        let source = T::Settlement::credit_for_benchmark(&caller, amount)
            .ok_or(BenchmarkError::Override(BenchmarkResult::from_weight(Weight::MAX)))?;
        fund::<T, I>(&source, amount);
        let before = Balances::<T, I>::get(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Balances::<T, I>::get(&caller), before + amount);
        Ok(())
    }

    impl_benchmark_test_suite!(FlowchainToken, crate::mock::new_test_ext(), crate::mock::Test);
}
