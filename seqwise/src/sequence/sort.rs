use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::compare::Comparable;
use crate::error;

use super::core::Sequence;
use super::creation::from_items;

impl<'a, T> Sequence<'a, T>
where
    T: Clone + 'a,
{
    /// Sort by the natural order of the elements.
    ///
    /// Like every sort in this module the sort is stable: equal elements
    /// keep their relative order. Sorting drains the sequence right away and
    /// returns a new sequence over the sorted elements, so later passes
    /// neither sort again nor touch the upstream. It must not be used on an
    /// infinite sequence without a [`take`](Sequence::take) in front of it.
    pub fn sort(&self) -> Self
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sort with a custom comparer. See [`sort`](Sequence::sort).
    pub fn sort_by<F>(&self, mut comparer: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.iter().collect::<Vec<_>>();
        trace!(
            target: "seqwise::sequence",
            len = items.len(),
            "materialized sequence for sorting"
        );
        items.sort_by(|a, b| comparer(a, b));
        from_items(items)
    }

    /// Sort by the elements' own [`Comparable`] order, reversed if
    /// `descending` is set.
    ///
    /// Like [`sort`](Sequence::sort) this materializes right away. Since
    /// comparisons can fail at runtime the result is wrapped in a `Result`;
    /// if any comparison fails the whole call fails with
    /// [`Error::NotComparable`](error::Error::NotComparable).
    pub fn sortc(&self, descending: bool) -> error::Result<Self>
    where
        T: Comparable,
    {
        let items = self.iter().collect::<Vec<_>>();
        trace!(
            target: "seqwise::sequence",
            len = items.len(),
            descending,
            "materialized sequence for sortc"
        );
        // slice::sort_by needs an infallible comparison that's a total
        // order, which a failing comparison can't promise. So we merge sort
        // ourselves and bail out on the first failure.
        let sorted = merge_sort(items, &mut |a: &T, b: &T| {
            a.compare(b).map(|ordering| {
                if descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            })
        })
        .map_err(|incomparable| {
            debug!(
                target: "seqwise::sequence",
                error = %incomparable,
                "sortc comparison failed"
            );
            error::Error::NotComparable
        })?;
        Ok(from_items(sorted))
    }
}

// Stable: on ties the element from the left half goes first.
fn merge_sort<T, E, F>(mut items: Vec<T>, compare: &mut F) -> Result<Vec<T>, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    if items.len() <= 1 {
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare)?;
    let right = merge_sort(right, compare)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if compare(r, l)? == Ordering::Less {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}
