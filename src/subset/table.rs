use tracing::{debug, trace};

use super::{Error, Result, Weights};

/// Entry of a reachability table for one sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Sum zero: reachable without picking anything.
    Empty,
    Unreachable,
    /// Position of the last weight of the chain reaching this sum.
    Pick(usize),
}

/// For every sum in `0..=max_sum`, the smallest weight position that
/// completes a selection reaching that sum.
///
/// Built once, then queried as many times as needed. A sum `s` with
/// `Pick(j)` is either the weight at `j` alone, or that weight on top of a
/// chain for `s - weights[j]` whose positions are all below `j`, so
/// unwinding never visits a position twice.
#[derive(Debug, Clone)]
pub struct ReachabilityTable {
    slots: Vec<Slot>,
    positions: usize,
}

/// Number of slots for a table covering `0..=max_sum`, if addressable.
fn slot_count(max_sum: u64) -> Option<usize> {
    usize::try_from(max_sum).ok()?.checked_add(1)
}

impl ReachabilityTable {
    /// # Panics
    ///
    /// When `max_sum + 1` slots cannot be addressed or allocated. Use
    /// [`ReachabilityTable::build_bounded`] for sizes coming from user input.
    pub fn build(weights: &Weights, max_sum: u64) -> Self {
        let Some(count) = slot_count(max_sum) else {
            panic!("table for sums up to {max_sum} cannot be addressed");
        };
        let mut slots = Vec::with_capacity(count);
        slots.push(Slot::Empty);

        for sum in 1..=max_sum {
            let slot = weights
                .iter()
                .enumerate()
                .find(|&(j, &w)| {
                    sum == w
                        || (sum > w
                            && matches!(slots[(sum - w) as usize], Slot::Pick(k) if k < j))
                })
                .map_or(Slot::Unreachable, |(j, _)| Slot::Pick(j));
            slots.push(slot);
        }

        let table = Self {
            slots,
            positions: weights.len(),
        };
        debug!(
            weights = table.positions,
            max_sum,
            reachable = table.reachable_sums().count(),
            "built reachability table"
        );
        table
    }

    /// Same as [`ReachabilityTable::build`], refusing tables above `limit` sums.
    pub fn build_bounded(weights: &Weights, max_sum: u64, limit: u64) -> Result<Self> {
        if max_sum > limit || slot_count(max_sum).is_none() {
            return Err(Error::TableTooLarge { max_sum, limit });
        }
        Ok(Self::build(weights, max_sum))
    }

    pub fn max_sum(&self) -> u64 {
        (self.slots.len() - 1) as u64
    }

    pub fn slot(&self, sum: u64) -> Result<Slot> {
        usize::try_from(sum)
            .ok()
            .and_then(|i| self.slots.get(i))
            .copied()
            .ok_or(Error::SumOutOfRange {
                sum,
                max_sum: self.max_sum(),
            })
    }

    pub fn is_reachable(&self, sum: u64) -> Result<bool> {
        Ok(self.slot(sum)? != Slot::Unreachable)
    }

    pub fn reachable_sums(&self) -> impl Iterator<Item = u64> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| **slot != Slot::Unreachable)
            .map(|(sum, _)| sum as u64)
    }

    /// Unwinds the chain for `sum`.
    ///
    /// `Ok(None)` means the sum is unreachable. `weights` must be the
    /// collection the table was built from.
    pub fn reconstruct(&self, weights: &Weights, sum: u64) -> Result<Option<Subset>> {
        if weights.len() != self.positions {
            return Err(Error::WeightsMismatch);
        }

        let mut remaining = sum;
        let mut subset = Subset::default();
        loop {
            match self.slot(remaining)? {
                Slot::Empty => break,
                Slot::Unreachable if subset.is_empty() => return Ok(None),
                Slot::Unreachable => return Err(Error::WeightsMismatch),
                Slot::Pick(j) => {
                    let w = weights.get(j).ok_or(Error::WeightsMismatch)?;
                    let descending = subset.positions.last().is_none_or(|&last| j < last);
                    if w > remaining || !descending {
                        return Err(Error::WeightsMismatch);
                    }
                    subset.positions.push(j);
                    subset.weights.push(w);
                    remaining -= w;
                }
            }
        }

        trace!(sum, picked = subset.len(), "reconstructed subset");
        Ok(Some(subset))
    }
}

/// Weights picked for one sum, from the end of the chain back to its base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subset {
    weights: Vec<u64>,
    positions: Vec<usize>,
}

impl Subset {
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Positions in the weight collection, strictly decreasing.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn sum(&self) -> u64 {
        self.weights.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn into_weights(self) -> Vec<u64> {
        self.weights
    }
}
