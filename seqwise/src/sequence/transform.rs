use std::hash::Hash;
use std::rc::Rc;

use ahash::{HashSet, HashSetExt};
use tracing::debug;

use crate::error;

use super::core::{Sequence, Stage};
use super::creation::from_items;

impl<'a, T> Sequence<'a, T>
where
    T: Clone + 'a,
{
    /// Keep only the elements for which `predicate` holds, in order.
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        Self::from_stage(Stage::Filter {
            upstream: self.clone(),
            predicate: Rc::new(predicate),
        })
    }

    /// Transform every element with `mapper`, one to one, in order.
    pub fn map<U, F>(&self, mapper: F) -> Sequence<'a, U>
    where
        U: Clone + 'a,
        F: Fn(T) -> U + 'a,
    {
        let upstream = self.clone();
        let mapper = Rc::new(mapper);
        Sequence::derived("Map", self, move || {
            let mapper = Rc::clone(&mapper);
            Box::new(upstream.iter().map(move |item| mapper(item)))
        })
    }

    /// Expand every element into the elements produced by `expander` and
    /// flatten the result, keeping source order.
    pub fn collect<U, I, F>(&self, expander: F) -> Sequence<'a, U>
    where
        U: Clone + 'a,
        I: IntoIterator<Item = U> + 'a,
        I::IntoIter: 'a,
        F: Fn(T) -> I + 'a,
    {
        let upstream = self.clone();
        let expander = Rc::new(expander);
        Sequence::derived("Collect", self, move || {
            let expander = Rc::clone(&expander);
            Box::new(upstream.iter().flat_map(move |item| expander(item)))
        })
    }

    /// All elements of this sequence followed by all elements of `other`.
    pub fn concat(&self, other: &Sequence<'a, T>) -> Self {
        let mut parts = Vec::new();
        self.push_parts(&mut parts);
        other.push_parts(&mut parts);
        match parts.len() {
            0 => Self::empty(),
            1 => parts.remove(0),
            _ => Self::from_stage(Stage::Concat(parts.into())),
        }
    }

    // splice in existing concatenations so they never nest
    fn push_parts(&self, parts: &mut Vec<Sequence<'a, T>>) {
        match &*self.stage {
            Stage::Empty => {}
            Stage::Concat(existing) => parts.extend(existing.iter().cloned()),
            _ => parts.push(self.clone()),
        }
    }

    /// All elements of this sequence followed by `items`, in the given order.
    pub fn append<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.concat(&from_items(items))
    }

    /// `items` in the given order followed by all elements of this sequence.
    pub fn prepend<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        from_items(items).concat(self)
    }

    /// Drop the first `count` elements.
    ///
    /// Skipping more elements than there are gives an empty sequence. A
    /// negative count is rejected immediately with
    /// [`Error::NegativeCount`](error::Error::NegativeCount).
    pub fn skip(&self, count: i64) -> error::Result<Self> {
        let count = non_negative("skip", count)?;
        Ok(Self::from_stage(Stage::Skip {
            upstream: self.clone(),
            count,
        }))
    }

    /// Keep at most the first `count` elements.
    ///
    /// Once `count` elements have been produced, the upstream is not pulled
    /// again, so `take` makes infinite sequences finite. A negative count is
    /// rejected immediately with
    /// [`Error::NegativeCount`](error::Error::NegativeCount).
    pub fn take(&self, count: i64) -> error::Result<Self> {
        let count = non_negative("take", count)?;
        Ok(Self::from_stage(Stage::Take {
            upstream: self.clone(),
            count,
        }))
    }

    /// Keep the first occurrence of every element, in order.
    ///
    /// Each pass keeps its own record of the elements seen so far, so memory
    /// grows with the number of distinct elements pulled.
    pub fn distinct(&self) -> Self
    where
        T: Hash + Eq,
    {
        let upstream = self.clone();
        Self::derived("Distinct", self, move || {
            let mut seen = HashSet::new();
            Box::new(upstream.iter().filter(move |item| seen.insert(item.clone())))
        })
    }
}

fn non_negative(operation: &'static str, count: i64) -> error::Result<usize> {
    usize::try_from(count).map_err(|_| {
        let err = error::Error::NegativeCount { operation, count };
        debug!(target: "seqwise::sequence", error = %err, "rejected count");
        err
    })
}
