//! Total order over keys
//!
//! Segment names compare case-sensitively here while `Eq` and `Hash` ignore
//! case, so two keys that are equal may still order apart (`a` vs `A`). Sorted
//! containers therefore keep both spellings as distinct entries.

use std::cmp::Ordering;

use super::array_spec::{ArrayBounds, ArraySpec};
use super::segment::Segment;
use super::types::Key;

impl Key {
    /// Compare two keys segment by segment
    ///
    /// On equal names a plain segment sorts before an array segment. Between
    /// arrays a wildcard sorts first, then ranges (by lower bound, then upper
    /// bound with `n` as the maximum), then absolute indexes. A key that is a
    /// prefix of another sorts first.
    #[must_use]
    pub fn compare_to(&self, other: &Key) -> Ordering {
        compare_segments(&self.segments, &other.segments)
    }
}

fn compare_segments(these: &[Segment], others: &[Segment]) -> Ordering {
    for (this, that) in these.iter().zip(others) {
        let ordering = this
            .name()
            .cmp(that.name())
            .then_with(|| compare_arrays(this.array_spec(), that.array_spec()));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    these.len().cmp(&others.len())
}

fn compare_arrays(this: Option<&ArraySpec>, that: Option<&ArraySpec>) -> Ordering {
    match (this, that) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (Some(this), Some(that)) => compare_bounds(this.bounds(), that.bounds()),
    }
}

fn compare_bounds(this: ArrayBounds, that: ArrayBounds) -> Ordering {
    use ArrayBounds::{Absolute, Bounded, Unbounded, Wildcard};

    match (this, that) {
        (Wildcard, Wildcard) => Ordering::Equal,
        (Wildcard, _) => Ordering::Less,
        (_, Wildcard) => Ordering::Greater,
        (Absolute(index), Absolute(other_index)) => index.cmp(&other_index),
        (Absolute(_), _) => Ordering::Greater,
        (_, Absolute(_)) => Ordering::Less,
        (Bounded { lower, upper }, Bounded { lower: other_lower, upper: other_upper }) => {
            lower.cmp(&other_lower).then(upper.cmp(&other_upper))
        }
        // an open upper bound sorts after every closed one
        (Bounded { lower, .. }, Unbounded { lower: other_lower }) => {
            lower.cmp(&other_lower).then(Ordering::Less)
        }
        (Unbounded { lower }, Bounded { lower: other_lower, .. }) => {
            lower.cmp(&other_lower).then(Ordering::Greater)
        }
        (Unbounded { lower }, Unbounded { lower: other_lower }) => lower.cmp(&other_lower),
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other)
    }
}
