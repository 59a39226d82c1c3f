//! Weights for pallet-flowchain-token.
//!
//! Hand-set placeholders until the `runtime-benchmarks` suite is run against a
//! reference machine. Every extrinsic touches at most a handful of storage items.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::Weight};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn add_minter() -> Weight;
    fn remove_minter() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn setup_mintable_address() -> Weight;
    fn mint_token() -> Weight;
    fn pause_issuance() -> Weight;
    fn resume_issuance() -> Weight;
    fn freeze_account() -> Weight;
    fn unfreeze_account() -> Weight;
    fn set_min_withdraw_amount() -> Weight;
    fn withdraw() -> Weight;
}

/// Weights scaled by the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn transfer() -> Weight {
        Weight::from_parts(25_000_000, 3_593).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    fn add_minter() -> Weight {
        Weight::from_parts(12_000_000, 1_489).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn remove_minter() -> Weight {
        Weight::from_parts(12_000_000, 1_489).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn mint() -> Weight {
        Weight::from_parts(22_000_000, 3_593).saturating_add(T::DbWeight::get().reads_writes(4, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(22_000_000, 3_593).saturating_add(T::DbWeight::get().reads_writes(4, 2))
    }
    fn setup_mintable_address() -> Weight {
        Weight::from_parts(11_000_000, 1_489).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn mint_token() -> Weight {
        Weight::from_parts(24_000_000, 3_593).saturating_add(T::DbWeight::get().reads_writes(5, 2))
    }
    fn pause_issuance() -> Weight {
        Weight::from_parts(10_000_000, 1_489).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn resume_issuance() -> Weight {
        Weight::from_parts(10_000_000, 1_489).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn freeze_account() -> Weight {
        Weight::from_parts(11_000_000, 1_489).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn unfreeze_account() -> Weight {
        Weight::from_parts(11_000_000, 1_489).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn set_min_withdraw_amount() -> Weight {
        Weight::from_parts(10_000_000, 1_489).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn withdraw() -> Weight {
        Weight::from_parts(40_000_000, 6_196).saturating_add(T::DbWeight::get().reads_writes(5, 3))
    }
}

// For tests and mock runtimes.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn add_minter() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn remove_minter() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn mint() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn burn() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn setup_mintable_address() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn mint_token() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn pause_issuance() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn resume_issuance() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn freeze_account() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn unfreeze_account() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn set_min_withdraw_amount() -> Weight {
        Weight::from_parts(10_000, 0)
    }
    fn withdraw() -> Weight {
        Weight::from_parts(10_000, 0)
    }
}
