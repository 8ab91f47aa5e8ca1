use crate::error;

/// Cardinality checks on an iterator.
///
/// Implemented for every iterator, so the same rules that back
/// [`Sequence::single`](crate::Sequence::single) and friends are available on
/// plain iterators too.
pub trait Occurrence<A> {
    /// Exactly one item. Stops after the second item.
    fn one(&mut self) -> error::Result<A>;
    /// Zero or one item. Stops after the second item.
    fn option(&mut self) -> error::Result<Option<A>>;
    /// One or more items.
    fn many(&mut self) -> error::Result<Vec<A>>;
}

impl<A, I> Occurrence<A> for I
where
    I: Iterator<Item = A>,
{
    fn one(&mut self) -> error::Result<A> {
        one(self)
    }

    fn option(&mut self) -> error::Result<Option<A>> {
        option(self)
    }

    fn many(&mut self) -> error::Result<Vec<A>> {
        let items = self.collect::<Vec<_>>();
        if items.is_empty() {
            Err(error::Error::Empty)
        } else {
            Ok(items)
        }
    }
}

pub(crate) fn one<T>(mut iter: impl Iterator<Item = T>) -> error::Result<T> {
    if let Some(one) = iter.next() {
        if iter.next().is_none() {
            Ok(one)
        } else {
            Err(error::Error::MoreThanOne)
        }
    } else {
        Err(error::Error::Empty)
    }
}

pub(crate) fn option<T>(mut iter: impl Iterator<Item = T>) -> error::Result<Option<T>> {
    if let Some(one) = iter.next() {
        if iter.next().is_none() {
            Ok(Some(one))
        } else {
            Err(error::Error::MoreThanOne)
        }
    } else {
        Ok(None)
    }
}

pub(crate) fn first<T>(mut iter: impl Iterator<Item = T>) -> error::Result<T> {
    iter.next().ok_or(error::Error::Empty)
}

pub(crate) fn last<T>(iter: impl Iterator<Item = T>) -> error::Result<T> {
    iter.last().ok_or(error::Error::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one() {
        assert_eq!(vec![5].into_iter().one(), Ok(5));
        assert_eq!(Vec::<i32>::new().into_iter().one(), Err(error::Error::Empty));
        assert_eq!(vec![5, 6].into_iter().one(), Err(error::Error::MoreThanOne));
    }

    #[test]
    fn test_one_stops_after_second() {
        let mut pulled = 0;
        let result = (0..).inspect(|_| pulled += 1).one();
        assert_eq!(result, Err(error::Error::MoreThanOne));
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_option() {
        assert_eq!(Vec::<i32>::new().into_iter().option(), Ok(None));
        assert_eq!(vec![5].into_iter().option(), Ok(Some(5)));
        assert_eq!(
            vec![5, 6].into_iter().option(),
            Err(error::Error::MoreThanOne)
        );
    }

    #[test]
    fn test_many() {
        assert_eq!(vec![1, 2].into_iter().many(), Ok(vec![1, 2]));
        assert_eq!(Vec::<i32>::new().into_iter().many(), Err(error::Error::Empty));
    }

    #[test]
    fn test_first_last() {
        assert_eq!(first(1..4), Ok(1));
        assert_eq!(last(1..4), Ok(3));
        assert_eq!(first(0..0), Err(error::Error::Empty));
        assert_eq!(last(0..0), Err(error::Error::Empty));
    }
}
