//! # Growable Array
//!
//! The `grow_array` crate provides a `#[no_std]` growable contiguous array
//! with a built-in restartable cursor. `GrowArr` stores its elements in one
//! contiguous buffer that doubles whenever an append finds it full, and reads
//! them back strictly in insertion order through an integrated cursor.
//!
//! `GrowArr` uses fallible allocations, meaning that instead of panicking on
//! allocation failure, it returns an error. A failed growth or clear never
//! disturbs the elements already stored, so the error can be handled and the
//! array kept in use.
//!
//! In addition, one can customize the type used for the length, capacity, and
//! cursor. On a 64-bit system specifying a smaller type than `usize` as a
//! generic (e.g. `u32`, the default) keeps the container small when the
//! element counts are modest.
//!
//! Lastly, the allocator API is not stable yet, so this crate provides a
//! trait `StorageAllocator` that works like the `Allocator` trait and can
//! back a `GrowArr` with a custom allocator.
//!
//! ```
//! use grow_array::GrowArr;
//! use grow_array::types::Global;
//!
//! let mut arr = GrowArr::<u32, Global>::with_capacity(2).unwrap();
//! arr.push(1).unwrap();
//! arr.push(2).unwrap();
//! arr.push(3).unwrap(); // doubles the capacity to 4
//!
//! arr.reset_cursor();
//! assert_eq!(arr.next_item(), Some(&1));
//! assert_eq!(arr.next_item(), Some(&2));
//! assert_eq!(arr.next_item(), Some(&3));
//! assert_eq!(arr.next_item(), None);
//! ```
//!
//! # Feature Flags
//! * `std_alloc` (default) - This feature enables a wrapper called `Global`
//!   that implements `StorageAllocator` using the standard allocator APIs.
//!
//! * `alloc_api2` - This feature enables the `Api2Alloc` adapter so any
//!   allocator from the `allocator-api2` crate can back a `GrowArr` on
//!   stable Rust.

#![no_std]

#[cfg(any(feature = "std_alloc", test))]
extern crate std;

mod grow_arr;
pub mod types;

pub use grow_arr::GrowArr;
