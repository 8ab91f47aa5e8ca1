use std::rc::Rc;

use super::core::{BoxedIter, Predicate, Sequence, Stage};

/// An iterator over the elements of a sequence.
///
/// Created by [`Sequence::iter`]. Pulling an element pulls exactly as many
/// elements from upstream as the stages in between need.
pub struct SequenceIter<'a, T> {
    state: State<'a, T>,
}

enum State<'a, T> {
    Done,
    Items {
        items: Rc<[T]>,
        index: usize,
    },
    Boxed(BoxedIter<'a, T>),
    Filter {
        inner: Box<SequenceIter<'a, T>>,
        predicate: Predicate<'a, T>,
    },
    Skip {
        inner: Box<SequenceIter<'a, T>>,
        pending: usize,
    },
    Take {
        inner: Box<SequenceIter<'a, T>>,
        remaining: usize,
    },
    Concat {
        current: Box<SequenceIter<'a, T>>,
        // a part is only started once the one before it is exhausted
        parts: Rc<[Sequence<'a, T>]>,
        next: usize,
    },
}

impl<'a, T> SequenceIter<'a, T>
where
    T: Clone + 'a,
{
    pub(crate) fn new(stage: &Stage<'a, T>) -> Self {
        let state = match stage {
            Stage::Empty => State::Done,
            Stage::Items(items) => State::Items {
                items: Rc::clone(items),
                index: 0,
            },
            Stage::Root(producer) => State::Boxed(producer()),
            Stage::Filter {
                upstream,
                predicate,
            } => State::Filter {
                inner: Box::new(upstream.iter()),
                predicate: Rc::clone(predicate),
            },
            Stage::Skip { upstream, count } => State::Skip {
                inner: Box::new(upstream.iter()),
                pending: *count,
            },
            Stage::Take { upstream, count } => State::Take {
                inner: Box::new(upstream.iter()),
                remaining: *count,
            },
            Stage::Concat(parts) => State::Concat {
                current: Box::new(Self::done()),
                parts: Rc::clone(parts),
                next: 0,
            },
            Stage::Derived { producer, .. } => State::Boxed(producer()),
        };
        Self { state }
    }

    fn done() -> Self {
        Self { state: State::Done }
    }
}

impl<'a, T> Iterator for SequenceIter<'a, T>
where
    T: Clone + 'a,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.state {
            State::Done => None,
            State::Items { items, index } => {
                let item = items.get(*index).cloned();
                if item.is_some() {
                    *index += 1;
                }
                item
            }
            State::Boxed(iter) => iter.next(),
            State::Filter { inner, predicate } => inner.find(|item| predicate(item)),
            State::Skip { inner, pending } => {
                if *pending > 0 {
                    let n = std::mem::take(pending);
                    inner.nth(n)
                } else {
                    inner.next()
                }
            }
            State::Take { inner, remaining } => {
                // once satisfied, the upstream is never advanced again
                if *remaining == 0 {
                    return None;
                }
                match inner.next() {
                    Some(item) => {
                        *remaining -= 1;
                        Some(item)
                    }
                    // the upstream need not be fused
                    None => {
                        *remaining = 0;
                        None
                    }
                }
            }
            State::Concat {
                current,
                parts,
                next,
            } => loop {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                match parts.get(*next) {
                    Some(part) => {
                        **current = part.iter();
                        *next += 1;
                    }
                    None => {
                        **current = Self::done();
                        return None;
                    }
                }
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Done => (0, Some(0)),
            State::Items { items, index } => {
                let remaining = items.len() - index;
                (remaining, Some(remaining))
            }
            State::Boxed(iter) => iter.size_hint(),
            // a filter may reject everything
            State::Filter { inner, .. } => (0, inner.size_hint().1),
            State::Skip { inner, pending } => {
                let (lower, upper) = inner.size_hint();
                (
                    lower.saturating_sub(*pending),
                    upper.map(|upper| upper.saturating_sub(*pending)),
                )
            }
            State::Take { inner, remaining } => {
                let (lower, upper) = inner.size_hint();
                let upper = match upper {
                    Some(upper) => upper.min(*remaining),
                    None => *remaining,
                };
                (lower.min(*remaining), Some(upper))
            }
            State::Concat {
                current,
                parts,
                next,
            } => {
                let (lower, upper) = current.size_hint();
                if *next < parts.len() {
                    // we don't know how long a part is until it's started
                    (lower, None)
                } else {
                    (lower, upper)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{from_items, from_iterable, Sequence};

    use super::super::core::BoxedIter;

    #[test]
    fn test_take_does_not_over_pull() {
        let pulled = Cell::new(0);
        let sequence = from_iterable(0..).map(|x: u32| {
            pulled.set(pulled.get() + 1);
            x
        });
        let taken = sequence.take(3).unwrap().iter().collect::<Vec<_>>();
        assert_eq!(taken, vec![0, 1, 2]);
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_concat_starts_second_half_late() {
        let pulled = Cell::new(0);
        let second = from_items(vec![10, 11]).map(|x| {
            pulled.set(pulled.get() + 1);
            x
        });
        let sequence = from_items(vec![1, 2]).concat(&second);
        let mut iter = sequence.iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(pulled.get(), 0);
        assert_eq!(iter.next(), Some(10));
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_concat_of_many_parts() {
        let sequence = from_items(vec![1])
            .append([2, 3])
            .concat(&from_iterable(4..6))
            .prepend([0]);
        let mut iter = sequence.iter();
        assert_eq!(iter.by_ref().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(iter.next(), None);
    }

    // yields 1, then None, then 3, then None, ...
    struct Flicker(u32);

    impl Iterator for Flicker {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            self.0 += 1;
            (self.0 % 2 == 1).then_some(self.0)
        }
    }

    #[test]
    fn test_take_stops_at_first_end() {
        let sequence = Sequence::root(|| -> BoxedIter<'static, u32> { Box::new(Flicker(0)) });
        let mut iter = sequence.take(5).unwrap().iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(sequence.take(5).unwrap().count(), 1);
    }

    #[test]
    fn test_size_hint() {
        let sequence = from_items(vec![1, 2, 3, 4, 5]);
        assert_eq!(sequence.iter().size_hint(), (5, Some(5)));
        assert_eq!(sequence.skip(2).unwrap().iter().size_hint(), (3, Some(3)));
        assert_eq!(sequence.take(2).unwrap().iter().size_hint(), (2, Some(2)));
        assert_eq!(
            sequence.filter(|x| *x > 2).iter().size_hint(),
            (0, Some(5))
        );
        assert_eq!(
            from_iterable(0..).take(4).unwrap().iter().size_hint(),
            (4, Some(4))
        );
    }
}
