//! Enumerable and bounded types.

/// Types whose values can be stepped through in order.
///
/// `succ` and `pred` return `None` past the ends of the type instead of
/// wrapping or panicking.
///
/// # Examples
///
/// ```rust
/// use fprelude::typeclass::Enum;
///
/// assert_eq!(7_u8.succ(), Some(8));
/// assert_eq!(u8::MAX.succ(), None);
/// assert_eq!('a'.range(&'e'), vec!['a', 'b', 'c', 'd', 'e']);
/// assert_eq!(false.range(&true), vec![false, true]);
/// ```
pub trait Enum: Sized {
    /// The next value, if any.
    fn succ(&self) -> Option<Self>;

    /// The previous value, if any.
    fn pred(&self) -> Option<Self>;

    /// Every value from `self` up to and including `to`.
    ///
    /// Empty when `to` precedes `self`.
    fn range(&self, to: &Self) -> Vec<Self>
    where
        Self: Clone + PartialOrd,
    {
        let mut values = Vec::new();
        let mut cursor = Some(self.clone());
        while let Some(value) = cursor {
            if value > *to {
                break;
            }
            cursor = value.succ();
            values.push(value);
        }
        values
    }
}

/// Types with a least and a greatest value.
///
/// Gives [`Max`](super::Max) and [`Min`](super::Min) their identity
/// elements.
pub trait Bounded {
    /// The least value.
    fn min_bound() -> Self;

    /// The greatest value.
    fn max_bound() -> Self;
}

macro_rules! integer_instances {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Enum for $integer {
                #[inline]
                fn succ(&self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn pred(&self) -> Option<Self> {
                    self.checked_sub(1)
                }
            }

            impl Bounded for $integer {
                #[inline]
                fn min_bound() -> Self {
                    <$integer>::MIN
                }

                #[inline]
                fn max_bound() -> Self {
                    <$integer>::MAX
                }
            }
        )*
    };
}

integer_instances!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

impl Enum for char {
    fn succ(&self) -> Option<Self> {
        match u32::from(*self) + 1 {
            SURROGATE_START => char::from_u32(SURROGATE_END + 1),
            next => char::from_u32(next),
        }
    }

    fn pred(&self) -> Option<Self> {
        match u32::from(*self).checked_sub(1)? {
            SURROGATE_END => char::from_u32(SURROGATE_START - 1),
            previous => char::from_u32(previous),
        }
    }
}

impl Bounded for char {
    fn min_bound() -> Self {
        '\0'
    }

    fn max_bound() -> Self {
        char::MAX
    }
}

impl Enum for bool {
    fn succ(&self) -> Option<Self> {
        (!*self).then_some(true)
    }

    fn pred(&self) -> Option<Self> {
        self.then_some(false)
    }
}

impl Bounded for bool {
    fn min_bound() -> Self {
        false
    }

    fn max_bound() -> Self {
        true
    }
}

impl Enum for () {
    fn succ(&self) -> Option<Self> {
        None
    }

    fn pred(&self) -> Option<Self> {
        None
    }
}

impl Bounded for () {
    fn min_bound() -> Self {}

    fn max_bound() -> Self {}
}
