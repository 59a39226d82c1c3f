//! Weights for pallet-flowchain-miner.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::Weight};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn issue() -> Weight;
}

/// Weights scaled by the runtime's database weights. `issue` includes the ledger's
/// delegate mint.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn issue() -> Weight {
        Weight::from_parts(35_000_000, 3_593).saturating_add(T::DbWeight::get().reads_writes(7, 4))
    }
}

// For tests and mock runtimes.
impl WeightInfo for () {
    fn issue() -> Weight {
        Weight::from_parts(10_000, 0)
    }
}
