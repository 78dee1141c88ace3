//! Fallible boxing on top of `std::alloc`.

use std::alloc::{Layout, alloc};
use std::ptr::NonNull;

/// Moves `value` into a new heap allocation.
///
/// Returns `None` instead of aborting when the global allocator reports
/// failure.
pub(crate) fn try_box<T>(value: T) -> Option<Box<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Some(Box::new(value));
    }

    // Safety: layout has non-zero size
    let ptr = unsafe { alloc(layout) }.cast::<T>();

    let Some(ptr) = NonNull::new(ptr) else {
        tracing::warn!(size = layout.size(), align = layout.align(), "allocation failed");
        return None;
    };

    // Safety: ptr is a fresh, suitably aligned allocation of Layout::new::<T>()
    // from the global allocator, which is what Box<T> expects to own.
    unsafe {
        ptr.as_ptr().write(value);
        Some(Box::from_raw(ptr.as_ptr()))
    }
}
