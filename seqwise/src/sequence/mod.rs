/// A sequence is a lazy chain of stages over some source of elements.
/// Transformations stack new stages on top; terminal operations pull the
/// elements through.
///
/// The stages themselves live in the core module, iteration over them in
/// the iter module.
mod core;
mod creation;
mod iter;
mod sort;
mod terminal;
mod transform;

pub use self::core::Sequence;
pub use creation::{from_items, from_iterable, from_seed};
pub use iter::SequenceIter;
