use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator as Alloc2;

use crate::types::AllocError;
use crate::types::StorageAllocator;

/// Adapts an `allocator_api2` allocator so it can back a
/// [`GrowArr`](crate::GrowArr).
///
/// A blanket `impl<A: Allocator> StorageAllocator for A` would overlap
/// the `&A` impl (allocator-api2 implements `Allocator` for references),
/// so the adapter is a newtype instead.
#[derive(Debug, Copy, Clone)]
pub struct Api2Alloc<A: Alloc2>(pub A);

unsafe impl<A: Alloc2> StorageAllocator for Api2Alloc<A> {
    #[inline]
    fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
        let Ok(mem) = self.0.allocate(layout) else {
            return Err(AllocError);
        };
        return Ok(mem);
    }

    #[inline]
    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { self.0.deallocate(ptr, layout) };
    }

    #[inline]
    unsafe fn grow(
        &self,
        old_ptr: NonNull<u8>,
        old_layout: Layout,
        new_layout: Layout,
    ) -> Result<NonNull<[u8]>, AllocError> {
        let Ok(mem) = (unsafe { self.0.grow(old_ptr, old_layout, new_layout) }) else {
            return Err(AllocError);
        };
        return Ok(mem);
    }
}
