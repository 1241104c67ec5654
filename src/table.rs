//! Generic precomputation-table entity (spec §3 `PrecompTable`).
//!
//! Every windowed/simultaneous scalar-multiplication strategy in `ep::mul`
//! and `eb::mul` builds a small table of odd point multiples inline;
//! `PrecompTable` is the reusable, cacheable form of that same idea, for
//! callers that perform many scalar multiplications against the same base
//! point (e.g. repeated signing with one fixed key) and want to build the
//! table once.

/// A cache of `base`'s successive results under a doubling-like step
/// function, indexed `0..len`. Generic over the point type `T` so it serves
/// both `ep::CurvePoint` and `eb::EbPoint` without duplicating the
/// bookkeeping spec §3 describes for `PrecompTable`.
pub struct PrecompTable<T> {
    entries: Vec<T>,
}

impl<T> PrecompTable<T> {
    /// Builds a table of `count` entries: `entries[0] = base`, and
    /// `entries[i] = step(&entries[i - 1])` for `i > 0`.
    #[must_use]
    pub fn build(base: T, count: usize, step: impl Fn(&T) -> T) -> Self {
        let mut entries = Vec::with_capacity(count);
        if count > 0 {
            entries.push(base);
            for i in 1..count {
                let next = step(&entries[i - 1]);
                entries.push(next);
            }
        }
        Self { entries }
    }

    /// The number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_applies_step_repeatedly() {
        let table = PrecompTable::build(1u32, 5, |previous| previous + 2);
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(0), Some(&1));
        assert_eq!(table.get(4), Some(&9));
        assert_eq!(table.get(5), None);
    }

    #[test]
    fn build_with_zero_count_is_empty() {
        let table = PrecompTable::build(1u32, 0, |previous| *previous);
        assert!(table.is_empty());
    }
}
