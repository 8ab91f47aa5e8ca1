use std::cmp::Ordering;
use std::rc::Rc;

use thiserror::Error;

/// Raised by [`Comparable::compare`] when two values have no defined order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("values have no defined order")]
pub struct Incomparable;

/// A type whose values can order themselves relative to each other.
///
/// This is what [`Sequence::sortc`](crate::Sequence::sortc) sorts by. Unlike
/// [`Ord`], the comparison may fail at runtime: values of a dynamically typed
/// enum may only be comparable within the same variant, and a float NaN has
/// no place in any order. A failure is reported to the caller of `sortc` as
/// [`Error::NotComparable`](crate::Error::NotComparable).
///
/// Comparisons that succeed must be consistent with a total order.
pub trait Comparable {
    fn compare(&self, other: &Self) -> Result<Ordering, Incomparable>;
}

macro_rules! comparable_ord {
    ($($t:ty),*) => {
        $(
            impl Comparable for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Result<Ordering, Incomparable> {
                    Ok(self.cmp(other))
                }
            }
        )*
    };
}

comparable_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String
);

impl Comparable for f32 {
    #[inline]
    fn compare(&self, other: &Self) -> Result<Ordering, Incomparable> {
        self.partial_cmp(other).ok_or(Incomparable)
    }
}

impl Comparable for f64 {
    #[inline]
    fn compare(&self, other: &Self) -> Result<Ordering, Incomparable> {
        self.partial_cmp(other).ok_or(Incomparable)
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Result<Ordering, Incomparable> {
        (**self).compare(*other)
    }
}

impl<T: Comparable + ?Sized> Comparable for Box<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Result<Ordering, Incomparable> {
        self.as_ref().compare(other.as_ref())
    }
}

impl<T: Comparable + ?Sized> Comparable for Rc<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Result<Ordering, Incomparable> {
        self.as_ref().compare(other.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ord_types() {
        assert_eq!(1i32.compare(&2), Ok(Ordering::Less));
        assert_eq!("b".compare("a"), Ok(Ordering::Greater));
        assert_eq!(
            String::from("x").compare(&String::from("x")),
            Ok(Ordering::Equal)
        );
    }

    #[test]
    fn test_nan_is_incomparable() {
        assert_eq!(1.5f64.compare(&2.5), Ok(Ordering::Less));
        assert_eq!(f64::NAN.compare(&1.0), Err(Incomparable));
        assert_eq!(1.0f32.compare(&f32::NAN), Err(Incomparable));
    }

    #[test]
    fn test_through_pointers() {
        let a = Rc::new(3u8);
        let b = Rc::new(7u8);
        assert_eq!(a.compare(&b), Ok(Ordering::Less));
        assert_eq!(Box::new(7u8).compare(&Box::new(3u8)), Ok(Ordering::Greater));
        assert_eq!(
            <&char as Comparable>::compare(&&'a', &&'a'),
            Ok(Ordering::Equal)
        );
    }
}
