pub mod table;
pub mod weights;

pub use table::{ReachabilityTable, Slot, Subset};
pub use weights::Weights;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("sum {sum} is above the table bound {max_sum}")]
    SumOutOfRange { sum: u64, max_sum: u64 },
    #[error("weight at position {position} is zero")]
    ZeroWeight { position: usize },
    #[error("weights do not match the ones the table was built for")]
    WeightsMismatch,
    #[error("table for sums up to {max_sum} exceeds the limit of {limit}")]
    TableTooLarge { max_sum: u64, limit: u64 },
}
