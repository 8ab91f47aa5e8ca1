//! Lazy, composable and re-iterable sequences.
//!
//! A [`Sequence`] describes a pipeline over a source of elements. Building
//! the pipeline with [`filter`](Sequence::filter), [`map`](Sequence::map),
//! [`skip`](Sequence::skip) and friends evaluates nothing; elements are only
//! pulled when a terminal operation such as [`count`](Sequence::count) or
//! [`first`](Sequence::first) runs, and every terminal operation runs the
//! pipeline again from its source.
//!
//! ```
//! use seqwise::from_iterable;
//!
//! let squares = from_iterable(1..)
//!     .map(|x: u64| x * x)
//!     .filter(|x| x % 2 == 1)
//!     .take(3)
//!     .unwrap();
//! assert_eq!(squares.to_vec(), vec![1, 9, 25]);
//! assert_eq!(squares.fold(0, |acc, x| acc + x), 35);
//! ```

pub mod compare;
pub mod error;
pub mod occurrence;
pub mod sequence;

pub use compare::{Comparable, Incomparable};
pub use error::{Error, ErrorKind, Result};
pub use occurrence::Occurrence;
pub use sequence::{from_items, from_iterable, from_seed, Sequence, SequenceIter};

/// Create a [`Sequence`] over the given items.
///
/// `sequence![]` is the empty sequence; otherwise this is
/// [`from_items`] over the items in the given order.
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::from_items(vec![$($item),+])
    };
}
