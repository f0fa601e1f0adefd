use std::collections::BTreeMap;

/// Count of bases observed at each integer truncated coverage value
#[derive(Default, Debug)]
pub struct CovHist {
    counts: BTreeMap<i64, u64>,
}

impl CovHist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one base observed at coverage z.  The fractional part of z is
    /// discarded (truncation toward zero).
    pub fn add(&mut self, z: f64) {
        *self.counts.entry(z as i64).or_insert(0) += 1
    }

    /// Total number of bases added
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// (coverage, count) pairs in ascending coverage order
    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_accumulated() {
        let mut h = CovHist::new();
        for z in [5.0, 5.0, 7.2] {
            h.add(z)
        }
        let v: Vec<_> = h.iter().collect();
        assert_eq!(v, vec![(5, 2), (7, 1)]);
        assert_eq!(h.total(), 3);
    }

    #[test]
    fn truncation_is_toward_zero() {
        let mut h = CovHist::new();
        h.add(3.9);
        h.add(-1.5);
        h.add(0.99);
        let v: Vec<_> = h.iter().collect();
        assert_eq!(v, vec![(-1, 1), (0, 1), (3, 1)]);
    }

    #[test]
    fn iteration_is_sorted_ascending() {
        let mut h = CovHist::new();
        for z in [12.0, 3.0, 7.0, 3.0, 0.0] {
            h.add(z)
        }
        let keys: Vec<_> = h.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![0, 3, 7, 12]);
    }
}
