use core::alloc::Layout;
use core::ptr::NonNull;

use crate::types::CountType;
use crate::types::ErrorKind;
use crate::types::GrowArrErr;
use crate::types::GrowArrResult;
use crate::types::StorageAllocator;

const fn layout_array(item: Layout, count: usize) -> GrowArrResult<Layout> {
    let lay = item.pad_to_align();
    let Some(bytes) = count.checked_mul(lay.size()) else {
        return Err(GrowArrErr::new(ErrorKind::UsizeOverflow));
    };
    let Ok(lay) = Layout::from_size_align(bytes, item.align()) else {
        return Err(GrowArrErr::new(ErrorKind::LayoutFailure));
    };
    return Ok(lay);
}

/// Raw backing storage for a `GrowArr`: the buffer pointer, its capacity
/// in elements, and the allocator that owns the bytes. Knows nothing
/// about element values; the outer array tracks the live length and
/// drops elements before any buffer is released.
pub(crate) struct Inner<A: StorageAllocator, L: CountType>
where
    usize: TryFrom<L>,
{
    ptr:      NonNull<u8>,
    capacity: L,
    alloc:    A,
}

impl<A: StorageAllocator, L: CountType> Inner<A, L>
where
    usize: TryFrom<L>,
{
    /// Allocates the initial buffer. The caller has already rejected a
    /// zero capacity. Zero-sized items allocate nothing: the pointer is
    /// dangling but aligned and the capacity saturates to `L::MAX`.
    pub(crate) fn with_capacity(alloc: A, capacity: L, item: Layout) -> GrowArrResult<Self> {
        if item.size() == 0 {
            let ptr = item.align() as *mut u8;
            return Ok(Self {
                ptr:      unsafe { NonNull::new_unchecked(ptr) },
                capacity: L::MAX,
                alloc:    alloc,
            });
        }

        let Ok(count) = usize::try_from(capacity) else {
            return Err(GrowArrErr::new(ErrorKind::UsizeOverflow));
        };
        let layout = layout_array(item, count)?;

        let Ok(ptr) = alloc.allocate(layout) else {
            return Err(GrowArrErr::new(ErrorKind::AllocFailure));
        };

        return Ok(Self {
            ptr:      ptr.cast(),
            capacity: capacity,
            alloc:    alloc,
        });
    }

    /// Doubles the capacity, moving the stored bytes into the larger
    /// buffer. On any failure the current buffer and its contents are
    /// untouched.
    pub(crate) fn grow_double(&mut self, item: Layout) -> GrowArrResult<()> {
        let Some(new_cap) = self.capacity.checked_mul(L::from(2u8)) else {
            return Err(GrowArrErr::new(ErrorKind::CapacityOverflow));
        };
        let Ok(old_count) = usize::try_from(self.capacity) else {
            return Err(GrowArrErr::new(ErrorKind::UsizeOverflow));
        };
        let Ok(new_count) = usize::try_from(new_cap) else {
            return Err(GrowArrErr::new(ErrorKind::UsizeOverflow));
        };
        let old_layout = layout_array(item, old_count)?;
        let new_layout = layout_array(item, new_count)?;

        let Ok(ptr) = (unsafe { self.alloc.grow(self.ptr, old_layout, new_layout) }) else {
            return Err(GrowArrErr::new(ErrorKind::AllocFailure));
        };

        self.ptr = ptr.cast();
        self.capacity = new_cap;
        return Ok(());
    }

    /// Allocates a replacement buffer of the current capacity without
    /// touching the live one. Returns `None` for zero-sized items, which
    /// have no storage to replace.
    pub(crate) fn alloc_fresh(&self, item: Layout) -> GrowArrResult<Option<(NonNull<u8>, Layout)>> {
        if item.size() == 0 {
            return Ok(None);
        }
        let Ok(count) = usize::try_from(self.capacity) else {
            return Err(GrowArrErr::new(ErrorKind::UsizeOverflow));
        };
        let layout = layout_array(item, count)?;

        let Ok(ptr) = self.alloc.allocate(layout) else {
            return Err(GrowArrErr::new(ErrorKind::AllocFailure));
        };
        return Ok(Some((ptr.cast(), layout)));
    }

    /// Installs a buffer obtained from `alloc_fresh`, releasing the old
    /// one. The layouts match since the capacity has not changed.
    ///
    /// # Safety
    /// Elements in the old buffer must already be dropped.
    pub(crate) unsafe fn swap_storage(&mut self, fresh: Option<(NonNull<u8>, Layout)>) {
        let Some((ptr, layout)) = fresh else {
            return;
        };
        unsafe { self.alloc.deallocate(self.ptr, layout) };
        self.ptr = ptr;
    }

    /// Releases the buffer.
    ///
    /// # Safety
    /// Elements must already be dropped, and the buffer must not be used
    /// afterwards. Only called on drop.
    pub(crate) unsafe fn release(&mut self, item: Layout) {
        if item.size() == 0 {
            return;
        }
        let Ok(count) = usize::try_from(self.capacity) else {
            return;
        };
        let Ok(layout) = layout_array(item, count) else {
            return;
        };
        unsafe { self.alloc.deallocate(self.ptr, layout) };
    }

    pub(crate) const fn capacity(&self) -> L {
        return self.capacity;
    }

    pub(crate) const fn get_ptr<T>(&self) -> *mut T {
        return self.ptr.as_ptr().cast();
    }
}
