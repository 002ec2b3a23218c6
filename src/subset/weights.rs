use serde::{Deserialize, Serialize};

use super::{Error, Result};

/// Ordered weight collection a reachability table is built from.
///
/// Positions matter: the table prefers the smallest position when several
/// weights could complete a sum, so the same values in another order can
/// produce different subsets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Weights(Vec<u64>);

impl Weights {
    /// Rejects zero weights, they can never be part of a chain.
    pub fn new(values: Vec<u64>) -> Result<Self> {
        if let Some(position) = values.iter().position(|&w| w == 0) {
            return Err(Error::ZeroWeight { position });
        }
        Ok(Self(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<u64> {
        self.0.get(position).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Sum of all weights, the largest sum that can be reachable.
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0, |acc, x| acc.saturating_add(*x))
    }
}

impl TryFrom<Vec<u64>> for Weights {
    type Error = Error;

    fn try_from(values: Vec<u64>) -> Result<Self> {
        Self::new(values)
    }
}

impl From<Weights> for Vec<u64> {
    fn from(w: Weights) -> Self {
        w.0
    }
}

impl std::fmt::Display for Weights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, w) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{w}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            Weights::new(vec![3, 0, 4, 0]),
            Err(Error::ZeroWeight { position: 1 })
        );
        assert!(Weights::new(vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_total() {
        assert_eq!(Weights::new(vec![3, 1, 4, 1, 5]).unwrap().total(), 14);
        assert_eq!(Weights::default().total(), 0);
        assert_eq!(Weights::new(vec![u64::MAX, 1]).unwrap().total(), u64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Weights::new(vec![3, 4]).unwrap().to_string(), "[3 4]");
        assert_eq!(Weights::default().to_string(), "[]");
    }

    #[test]
    fn test_deserialize_validates() {
        let w: Weights = serde_json::from_str("[2, 2]").unwrap();
        assert_eq!(w.as_slice(), &[2, 2]);
        assert!(serde_json::from_str::<Weights>("[2, 0]").is_err());
        assert!(serde_json::from_str::<Weights>("[2, -1]").is_err());
        assert!(serde_json::from_str::<Weights>("[2.5]").is_err());
    }
}
