#[cfg(feature = "alloc_api2")]
mod alloc_api2;
mod count_type;
mod errors;
#[cfg(feature = "std_alloc")]
mod std_alloc;
mod storage_alloc;

#[cfg(feature = "alloc_api2")]
pub use alloc_api2::Api2Alloc;
pub use count_type::CountType;
pub use errors::*;
#[cfg(feature = "std_alloc")]
pub use std_alloc::Global;
pub use storage_alloc::AllocError;
pub use storage_alloc::StorageAllocator;
