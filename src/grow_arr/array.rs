use core::alloc::Layout;
use core::marker::PhantomData;
use core::ptr;

use super::inner::Inner;
use crate::types::CountType;
use crate::types::ErrorKind;
#[cfg(feature = "std_alloc")]
use crate::types::Global;
use crate::types::GrowArrErr;
use crate::types::GrowArrResult;
use crate::types::StorageAllocator;

/// A growable contiguous array with fallible allocation and a built-in
/// restartable cursor.
///
/// Elements live in one contiguous buffer that doubles in size whenever
/// an append finds it full, so appends are amortized O(1). Reading back
/// is strictly sequential: [`reset_cursor`](Self::reset_cursor) moves the
/// cursor to the front and [`next_item`](Self::next_item) hands out
/// elements in insertion order until it reports the end. There is no
/// index-based access.
///
/// Every operation that can allocate returns a [`GrowArrResult`] instead
/// of panicking, and a failed allocation never disturbs the elements
/// already stored. Dropping the array releases the buffer through the
/// allocator it was built with; a dropped or moved-out array cannot be
/// used again, so there is no runtime liveness state to check.
pub struct GrowArr<T, A: StorageAllocator, L: CountType = u32>
where
    usize: TryFrom<L>,
{
    inner:  Inner<A, L>,
    len:    L,
    cursor: L,
    _ph:    PhantomData<T>,
}

impl<T, A: StorageAllocator, L: CountType> GrowArr<T, A, L>
where
    usize: TryFrom<L>,
{
    const LAYOUT: Layout = Layout::new::<T>();

    /// Creates an array with room for `capacity` elements using `alloc`.
    ///
    /// `capacity` must be at least 1 so that doubling growth always has a
    /// non-zero base; zero is rejected with [`ErrorKind::ZeroCapacity`].
    /// If the allocator cannot provide the buffer this fails with
    /// [`ErrorKind::AllocFailure`] and nothing is leaked. The buffer
    /// contents ahead of the first append are unspecified and never read.
    pub fn with_capacity_in(alloc: A, capacity: L) -> GrowArrResult<Self> {
        if capacity == L::ZERO {
            return Err(GrowArrErr::new(ErrorKind::ZeroCapacity));
        }
        let inner = Inner::with_capacity(alloc, capacity, Self::LAYOUT)?;
        return Ok(Self {
            inner:  inner,
            len:    L::ZERO,
            cursor: L::ZERO,
            _ph:    PhantomData,
        });
    }

    /// Appends an element, doubling the capacity first when the buffer
    /// is full.
    ///
    /// Amortized O(1) across a sequence of appends. If growth fails the
    /// stored elements are untouched and the append is aborted with the
    /// error.
    pub fn push(&mut self, item: T) -> GrowArrResult<()> {
        if self.len >= self.capacity() {
            self.inner.grow_double(Self::LAYOUT)?;
        }

        let Ok(len) = usize::try_from(self.len) else {
            return Err(GrowArrErr::new(ErrorKind::UsizeOverflow));
        };

        let slot = unsafe { self.as_mut_ptr().add(len) };
        unsafe { ptr::write(slot, item) };
        self.len += L::ONE;

        return Ok(());
    }

    /// Moves the cursor back to the first element.
    ///
    /// Does not touch the stored elements. Safe to call any number of
    /// times, including on an empty array.
    pub fn reset_cursor(&mut self) {
        self.cursor = L::ZERO;
    }

    /// Returns the element at the cursor and advances past it, or `None`
    /// once the cursor has passed the last element. Exhaustion is a
    /// normal signal and idempotent: further calls keep returning `None`
    /// until the cursor is reset.
    ///
    /// The bound is the live length, not a snapshot taken at the last
    /// [`reset_cursor`](Self::reset_cursor): elements appended while a
    /// traversal is underway become visible to that same traversal.
    pub fn next_item(&mut self) -> Option<&T> {
        if self.cursor >= self.len {
            return None;
        }
        let at = self.cursor.as_usize();
        self.cursor += L::ONE;
        return Some(unsafe { &*self.as_ptr().add(at) });
    }

    /// Drops every element and replaces the buffer with a fresh one of
    /// the same capacity, resetting the cursor.
    ///
    /// The capacity is preserved, not shrunk back to the construction
    /// value. The fresh buffer is allocated before anything is released,
    /// so on [`ErrorKind::AllocFailure`] the array is left fully intact,
    /// elements included.
    pub fn clear(&mut self) -> GrowArrResult<()> {
        let fresh = self.inner.alloc_fresh(Self::LAYOUT)?;

        let len = self.len.as_usize();
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), len)) };
        unsafe { self.inner.swap_storage(fresh) };

        self.len = L::ZERO;
        self.cursor = L::ZERO;
        return Ok(());
    }

    /// Number of elements the current buffer can hold without growing.
    pub const fn capacity(&self) -> L {
        return self.inner.capacity();
    }

    /// Number of stored elements.
    #[inline]
    pub const fn len(&self) -> L {
        return self.len;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.len == L::ZERO;
    }

    #[inline]
    const fn as_ptr(&self) -> *const T {
        return self.inner.get_ptr();
    }

    #[inline]
    const fn as_mut_ptr(&self) -> *mut T {
        return self.inner.get_ptr();
    }
}

#[cfg(feature = "std_alloc")]
impl<T, L: CountType> GrowArr<T, Global, L>
where
    usize: TryFrom<L>,
{
    /// Creates an array with room for `capacity` elements using the
    /// global allocator.
    pub fn with_capacity(capacity: L) -> GrowArrResult<Self> {
        return Self::with_capacity_in(Global, capacity);
    }
}

impl<T, A: StorageAllocator, L: CountType> Drop for GrowArr<T, A, L>
where
    usize: TryFrom<L>,
{
    fn drop(&mut self) {
        let len = self.len.as_usize();
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), len)) };
        unsafe { self.inner.release(Self::LAYOUT) };
    }
}
