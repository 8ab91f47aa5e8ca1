// A sequence is a chain of stages. Each transformation wraps the sequence it
// was called on into a new stage; nothing is evaluated until a SequenceIter
// is pulled. Stages that keep the element type are spelled out as variants
// so iteration can dispatch on them directly; map, collect and distinct
// change or constrain the element type, so they are erased behind a
// producer closure in `Derived`.

use std::fmt;
use std::rc::Rc;

use super::iter::SequenceIter;

pub(crate) type BoxedIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// Creates a fresh iterator over a root or erased stage for every pass.
pub(crate) type Producer<'a, T> = Rc<dyn Fn() -> BoxedIter<'a, T> + 'a>;

pub(crate) type Predicate<'a, T> = Rc<dyn Fn(&T) -> bool + 'a>;

pub(crate) enum Stage<'a, T> {
    Empty,
    Items(Rc<[T]>),
    Root(Producer<'a, T>),
    Filter {
        upstream: Sequence<'a, T>,
        predicate: Predicate<'a, T>,
    },
    Skip {
        upstream: Sequence<'a, T>,
        count: usize,
    },
    Take {
        upstream: Sequence<'a, T>,
        count: usize,
    },
    // never nested: concatenating a concatenation splices in its parts
    Concat(Rc<[Sequence<'a, T>]>),
    Derived {
        operation: &'static str,
        // only kept for Debug; the producer holds its own handle
        upstream: Rc<dyn fmt::Debug + 'a>,
        producer: Producer<'a, T>,
    },
}

/// A lazy, re-iterable sequence of `T`.
///
/// A `Sequence` is a handle to a chain of stages rooted in some source.
/// Transformations such as [`filter`](Sequence::filter) and
/// [`map`](Sequence::map) return a new sequence wrapping this one and never
/// touch an element; only iterating (through [`iter`](Sequence::iter) or a
/// terminal operation like [`count`](Sequence::count)) pulls elements
/// through the chain, one at a time.
///
/// Every call to `iter` re-runs the whole chain from its root. Nothing is
/// cached between passes. A sequence can be iterated any number of times
/// provided its root can be: roots made with
/// [`from_iterable`](crate::from_iterable) or
/// [`from_items`](crate::from_items) always can, a root made with
/// [`Sequence::once`] yields its elements on the first pass only. Derived
/// stages add no restriction beyond the one their root already has.
///
/// Cloning a sequence is cheap: it shares the stage chain.
///
/// A pass nests one iterator per stage, so a chain tens of thousands of
/// stages deep can overflow the stack. Concatenation is the exception:
/// repeated [`concat`](Sequence::concat), [`append`](Sequence::append) and
/// [`prepend`](Sequence::prepend) calls collapse into a single flat stage.
pub struct Sequence<'a, T> {
    pub(crate) stage: Rc<Stage<'a, T>>,
}

impl<'a, T> Sequence<'a, T> {
    pub(crate) fn from_stage(stage: Stage<'a, T>) -> Self {
        Self {
            stage: Rc::new(stage),
        }
    }

    /// Construct an empty sequence
    pub fn empty() -> Self {
        Self::from_stage(Stage::Empty)
    }

    pub(crate) fn root<P>(producer: P) -> Self
    where
        P: Fn() -> BoxedIter<'a, T> + 'a,
    {
        Self::from_stage(Stage::Root(Rc::new(producer)))
    }

    pub(crate) fn derived<S, P>(
        operation: &'static str,
        upstream: &Sequence<'a, S>,
        producer: P,
    ) -> Self
    where
        S: 'a,
        P: Fn() -> BoxedIter<'a, T> + 'a,
    {
        Self::from_stage(Stage::Derived {
            operation,
            upstream: Rc::new(upstream.clone()),
            producer: Rc::new(producer),
        })
    }
}

impl<'a, T> Sequence<'a, T>
where
    T: Clone + 'a,
{
    /// Access an iterator over the elements of the sequence.
    ///
    /// Each call starts a new pass from the root of the chain.
    pub fn iter(&self) -> SequenceIter<'a, T> {
        SequenceIter::new(&self.stage)
    }
}

impl<T> Clone for Sequence<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stage: Rc::clone(&self.stage),
        }
    }
}

impl<T> Default for Sequence<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

// Debug shows the shape of the chain. It never iterates, so it works for
// element types without Debug and for infinite roots.
impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.stage, f)
    }
}

impl<T> fmt::Debug for Stage<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Empty => f.write_str("Empty"),
            Stage::Items(items) => f.debug_struct("Items").field("len", &items.len()).finish(),
            Stage::Root(_) => f.write_str("Root"),
            Stage::Filter { upstream, .. } => {
                f.debug_struct("Filter").field("upstream", upstream).finish()
            }
            Stage::Skip { upstream, count } => f
                .debug_struct("Skip")
                .field("count", count)
                .field("upstream", upstream)
                .finish(),
            Stage::Take { upstream, count } => f
                .debug_struct("Take")
                .field("count", count)
                .field("upstream", upstream)
                .finish(),
            Stage::Concat(parts) => f.debug_struct("Concat").field("parts", parts).finish(),
            Stage::Derived {
                operation,
                upstream,
                ..
            } => f
                .debug_struct(operation)
                .field("upstream", upstream)
                .finish(),
        }
    }
}
