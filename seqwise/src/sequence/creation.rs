use std::cell::RefCell;
use std::rc::Rc;

use super::core::{BoxedIter, Sequence, Stage};
use super::iter::SequenceIter;

/// Wrap a re-iterable source in a sequence.
///
/// The source is cloned at the start of every pass, so anything that is
/// cheap to clone and iterates the same way each time works: ranges
/// (including open ones like `0..`), slice iterators, or adapters over them.
/// Owned collections work too, but are copied on every pass; use
/// [`from_items`] for those instead.
pub fn from_iterable<'a, I>(iterable: I) -> Sequence<'a, I::Item>
where
    I: IntoIterator + Clone + 'a,
    I::IntoIter: 'a,
{
    Sequence::root(move || Box::new(iterable.clone().into_iter()))
}

/// A sequence over a fixed, finite list of items, in the given order.
///
/// The items are stored once and shared between passes and clones of the
/// sequence. See also the [`sequence!`](crate::sequence!) macro.
pub fn from_items<'a, T, I>(items: I) -> Sequence<'a, T>
where
    I: IntoIterator<Item = T>,
{
    let items = items.into_iter().collect::<Rc<[T]>>();
    if items.is_empty() {
        Sequence::empty()
    } else {
        Sequence::from_stage(Stage::Items(items))
    }
}

/// Expand a single seed value into a sequence.
///
/// This is the same as `from_items([seed]).collect(expander)`: the sequence
/// holds whatever `expander` produces for `seed`, and `expander` is called
/// again on every pass.
pub fn from_seed<'a, S, T, I, F>(seed: S, expander: F) -> Sequence<'a, T>
where
    S: Clone + 'a,
    T: Clone + 'a,
    I: IntoIterator<Item = T> + 'a,
    I::IntoIter: 'a,
    F: Fn(S) -> I + 'a,
{
    from_items([seed]).collect(expander)
}

impl<'a, T> Sequence<'a, T> {
    /// Wrap a single-use iterator in a sequence.
    ///
    /// The first pass drains `iter`; every later pass finds it exhausted and
    /// yields nothing. Pipelines built on top behave the same way, so
    /// running two terminal operations on such a sequence gives diverging
    /// results.
    pub fn once<I>(iter: I) -> Self
    where
        T: 'a,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let cell = RefCell::new(Some(iter.into_iter()));
        Self::root(move || -> BoxedIter<'a, T> {
            match cell.borrow_mut().take() {
                Some(iter) => Box::new(iter),
                None => Box::new(std::iter::empty()),
            }
        })
    }
}

impl<T> From<Vec<T>> for Sequence<'_, T> {
    fn from(items: Vec<T>) -> Self {
        from_items(items)
    }
}

impl<T> FromIterator<T> for Sequence<'_, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        from_items(iter)
    }
}

impl<'a, T> IntoIterator for Sequence<'a, T>
where
    T: Clone + 'a,
{
    type Item = T;
    type IntoIter = SequenceIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &Sequence<'a, T>
where
    T: Clone + 'a,
{
    type Item = T;
    type IntoIter = SequenceIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iterable_range() {
        let sequence = from_iterable(1..4);
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_from_iterable_slice() {
        let words = ["alpha", "beta"];
        let sequence = from_iterable(words.iter().copied());
        assert_eq!(sequence.map(|w| w.len()).to_vec(), vec![5, 4]);
    }

    #[test]
    fn test_from_items_empty_is_empty_stage() {
        let sequence = from_items(Vec::<u8>::new());
        assert!(matches!(*sequence.stage, Stage::Empty));
        assert_eq!(sequence.count(), 0);
    }

    #[test]
    fn test_from_seed() {
        // a run of powers of two starting at the seed
        let sequence = from_seed(1u32, |seed| (0..5).map(move |i| seed << i));
        assert_eq!(sequence.to_vec(), vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_from_seed_infinite() {
        let sequence = from_seed(3u64, |seed| (seed..).step_by(3));
        assert_eq!(sequence.take(4).unwrap().to_vec(), vec![3, 6, 9, 12]);
    }

    #[test]
    fn test_once_is_single_pass() {
        let sequence = Sequence::once(vec![1, 2, 3]);
        let doubled = sequence.map(|x| x * 2);
        assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
        assert!(doubled.to_vec().is_empty());
        assert_eq!(sequence.count(), 0);
    }

    #[test]
    fn test_collect_into_sequence() {
        let sequence = (1..=3).collect::<Sequence<_>>();
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
        let sequence: Sequence<_> = vec!['a', 'b'].into();
        assert_eq!(sequence.to_vec(), vec!['a', 'b']);
    }

    #[test]
    fn test_into_iterator() {
        let sequence = from_items(vec![1, 2, 3]);
        let mut total = 0;
        for item in &sequence {
            total += item;
        }
        assert_eq!(total, 6);
        assert_eq!(sequence.into_iter().max(), Some(3));
    }
}
