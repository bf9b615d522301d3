use core::cmp;
use core::ops;

/// This trait is used for letting you specify the type of the length,
/// capacity, and cursor fields of a [`GrowArr`](crate::GrowArr). If you
/// have some other type that behaves like an unsigned integer, you can
/// implement this trait for it.
///
/// It's marked as unsafe since your type must be continuous and ordered
/// under addition and multiplication like the built-in unsigned integers.
pub unsafe trait CountType
where
    Self: Copy,
    Self: cmp::Eq,
    Self: cmp::Ord,
    Self: cmp::PartialEq,
    Self: cmp::PartialOrd,
    Self: ops::Add<Output = Self>,
    Self: ops::AddAssign,
    Self: Sized,
    Self: From<u8>,
    usize: TryFrom<Self>,
{
    const MAX: Self;
    const ONE: Self;
    const ZERO: Self;

    fn as_usize(self) -> usize;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_count_type {
    ($typ:ty) => {
        unsafe impl CountType for $typ {
            const MAX: Self = <$typ>::MAX;
            const ONE: Self = 1;
            const ZERO: Self = 0;

            #[inline(always)]
            fn as_usize(self) -> usize {
                return self as usize;
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                return self.checked_mul(rhs);
            }
        }
    };
}

impl_count_type!(usize);
impl_count_type!(u8);
impl_count_type!(u16);
impl_count_type!(u32);
impl_count_type!(u64);
impl_count_type!(u128);
