use tracing::{debug, trace};

use crate::error;
use crate::occurrence;

use super::core::Sequence;

// The `_where` variants test their predicate inside the pass rather than
// stacking a filter stage, so the predicate only has to live for the call.
impl<'a, T> Sequence<'a, T>
where
    T: Clone + 'a,
{
    /// The number of elements. Iterates the whole sequence.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// The number of elements for which `predicate` holds.
    pub fn count_where<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).count()
    }

    /// Whether `predicate` holds for every element.
    ///
    /// Stops at the first element that fails. An empty sequence gives `true`.
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|item| predicate(&item))
    }

    /// Whether the sequence has at least one element.
    pub fn any(&self) -> bool {
        self.iter().next().is_some()
    }

    /// Whether `predicate` holds for at least one element.
    ///
    /// Stops at the first element that matches.
    pub fn any_where<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|item| predicate(&item))
    }

    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    /// Reduce the sequence from left to right, starting with `seed`.
    ///
    /// An empty sequence gives back `seed`.
    pub fn fold<A, F>(&self, seed: A, accumulator: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(seed, accumulator)
    }

    /// Like [`fold`](Sequence::fold), starting from `A::default()`.
    pub fn fold_default<A, F>(&self, accumulator: F) -> A
    where
        A: Default,
        F: FnMut(A, T) -> A,
    {
        self.fold(A::default(), accumulator)
    }

    /// Hand the sequence itself, still unevaluated, to `applicator`.
    pub fn apply<R, F>(&self, applicator: F) -> R
    where
        F: FnOnce(&Self) -> R,
    {
        applicator(self)
    }

    /// Fold the sequence and hand the folded value to `applicator`.
    pub fn apply_fold<A, R, F, G>(&self, applicator: G, seed: A, accumulator: F) -> R
    where
        F: FnMut(A, T) -> A,
        G: FnOnce(A) -> R,
    {
        applicator(self.fold(seed, accumulator))
    }

    /// Run `action` on every element, for its effect.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(T),
    {
        self.iter().for_each(action)
    }

    /// Materialize the sequence into a vector, in order.
    pub fn to_vec(&self) -> Vec<T> {
        let items = self.iter().collect::<Vec<_>>();
        trace!(target: "seqwise::sequence", len = items.len(), "materialized sequence");
        items
    }

    /// The first element.
    ///
    /// Fails with [`Error::Empty`](error::Error::Empty) if there is none.
    pub fn first(&self) -> error::Result<T> {
        occurrence::first(self.iter()).inspect_err(|err| failed("first", err))
    }

    pub fn first_where<F>(&self, mut predicate: F) -> error::Result<T>
    where
        F: FnMut(&T) -> bool,
    {
        occurrence::first(self.iter().filter(|item| predicate(item)))
            .inspect_err(|err| failed("first_where", err))
    }

    /// The first element, or `default` if there is none.
    pub fn first_or(&self, default: T) -> T {
        self.iter().next().unwrap_or(default)
    }

    pub fn first_or_where<F>(&self, default: T, mut predicate: F) -> T
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|item| predicate(item)).unwrap_or(default)
    }

    /// The last element. Iterates the whole sequence.
    ///
    /// Fails with [`Error::Empty`](error::Error::Empty) if there is none.
    pub fn last(&self) -> error::Result<T> {
        occurrence::last(self.iter()).inspect_err(|err| failed("last", err))
    }

    pub fn last_where<F>(&self, mut predicate: F) -> error::Result<T>
    where
        F: FnMut(&T) -> bool,
    {
        occurrence::last(self.iter().filter(|item| predicate(item)))
            .inspect_err(|err| failed("last_where", err))
    }

    /// The last element, or `default` if there is none.
    pub fn last_or(&self, default: T) -> T {
        self.iter().last().unwrap_or(default)
    }

    pub fn last_or_where<F>(&self, default: T, mut predicate: F) -> T
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).last().unwrap_or(default)
    }

    /// The only element.
    ///
    /// Fails with [`Error::Empty`](error::Error::Empty) if there is no
    /// element and with [`Error::MoreThanOne`](error::Error::MoreThanOne) as
    /// soon as a second element shows up; the rest of the sequence is not
    /// pulled.
    pub fn single(&self) -> error::Result<T> {
        occurrence::one(self.iter()).inspect_err(|err| failed("single", err))
    }

    pub fn single_where<F>(&self, mut predicate: F) -> error::Result<T>
    where
        F: FnMut(&T) -> bool,
    {
        occurrence::one(self.iter().filter(|item| predicate(item)))
            .inspect_err(|err| failed("single_where", err))
    }

    /// The only element, or `default` if there are none or several.
    pub fn single_or(&self, default: T) -> T {
        occurrence::one(self.iter()).unwrap_or(default)
    }

    pub fn single_or_where<F>(&self, default: T, mut predicate: F) -> T
    where
        F: FnMut(&T) -> bool,
    {
        occurrence::one(self.iter().filter(|item| predicate(item))).unwrap_or(default)
    }
}

fn failed(operation: &'static str, err: &error::Error) {
    debug!(target: "seqwise::sequence", operation, error = %err, "terminal operation failed");
}
