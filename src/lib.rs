//! Subset sums over an ordered weight collection.
//!
//! [`subset::ReachabilityTable::build`] computes, once, which sums up to a
//! bound can be reached using each weight at most once.
//! [`subset::ReachabilityTable::reconstruct`] then recovers one subset per
//! queried sum from that table.

pub mod subset;
