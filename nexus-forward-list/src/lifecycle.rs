//! Slot-based list lifecycle.
//!
//! A [`Slot`] is an optional boxed list: the place a list handle lives before
//! [`init`] and after [`deinit`]. The functions here take the slot by
//! `Option<&mut Slot<P>>` so that a missing slot reference is reported as
//! [`ListError::BadStructure`] instead of being unrepresentable.
//!
//! ```
//! use nexus_forward_list::lifecycle::{self, Slot};
//! use nexus_forward_list::{ListError, create_node};
//!
//! let mut slot: Slot<u32> = None;
//!
//! let list = lifecycle::init(Some(&mut slot)).unwrap();
//! list.add_node(create_node(1)).unwrap();
//!
//! lifecycle::list_mut(Some(&mut slot))?.add_node(create_node(2))?;
//! assert_eq!(lifecycle::list_ref(Some(&slot))?.len(), 2);
//!
//! lifecycle::deinit(Some(&mut slot)).unwrap();
//! assert!(slot.is_none());
//! assert_eq!(lifecycle::list_mut(Some(&mut slot)).err(), Some(ListError::BadStructure));
//! # Ok::<(), ListError>(())
//! ```

use crate::ForwardList;
use crate::ListError;
use crate::alloc::try_box;

/// Storage for a list handle. `None` until [`init`] and after [`deinit`].
pub type Slot<P> = Option<Box<ForwardList<P>>>;

/// Initializes the list in `slot`, allocating it if the slot is empty.
///
/// A list already in the slot is reset to empty. Its nodes are released;
/// payload handles are untouched either way.
///
/// # Errors
///
/// - [`ListError::BadStructure`] if `slot` is `None`.
/// - [`ListError::AllocationFailure`] if a new list cannot be allocated. The
///   slot stays empty.
pub fn init<P: Copy>(slot: Option<&mut Slot<P>>) -> Result<&mut ForwardList<P>, ListError> {
    let slot = slot.ok_or(ListError::BadStructure)?;

    let list = match slot.take() {
        Some(list) => {
            if list.is_empty() {
                tracing::debug!("reinitializing empty list");
            } else {
                tracing::warn!(
                    discarded = list.len(),
                    "reinitializing a populated list, discarding its nodes"
                );
            }
            list
        }
        None => {
            let list = try_box(ForwardList::new()).ok_or(ListError::AllocationFailure)?;
            tracing::debug!("allocated list");
            list
        }
    };

    let list: &mut ForwardList<P> = slot.insert(list);
    list.clear();
    Ok(list)
}

/// Releases the list in `slot` along with all of its nodes, leaving the slot
/// empty.
///
/// # Errors
///
/// [`ListError::BadStructure`] if `slot` is `None` or holds no list.
pub fn deinit<P: Copy>(slot: Option<&mut Slot<P>>) -> Result<(), ListError> {
    let slot = slot.ok_or(ListError::BadStructure)?;
    let mut list = slot.take().ok_or(ListError::BadStructure)?;

    tracing::debug!(released = list.len(), "deinitialized list");
    list.clear();
    Ok(())
}

/// Resolves a slot to the list it holds.
///
/// # Errors
///
/// [`ListError::BadStructure`] if `slot` is `None` or holds no list.
pub fn list_mut<P: Copy>(slot: Option<&mut Slot<P>>) -> Result<&mut ForwardList<P>, ListError> {
    slot.and_then(|slot| slot.as_deref_mut())
        .ok_or(ListError::BadStructure)
}

/// Resolves a slot to the list it holds, read-only.
///
/// Lookups through an absent list give an empty result:
///
/// ```
/// use nexus_forward_list::lifecycle::{self, Slot};
///
/// let slot: Slot<u8> = None;
/// let node = lifecycle::list_ref(Some(&slot))
///     .ok()
///     .and_then(|list| list.get_node_at(0));
/// assert!(node.is_none());
/// ```
///
/// # Errors
///
/// [`ListError::BadStructure`] if `slot` is `None` or holds no list.
pub fn list_ref<P: Copy>(slot: Option<&Slot<P>>) -> Result<&ForwardList<P>, ListError> {
    slot.and_then(|slot| slot.as_deref())
        .ok_or(ListError::BadStructure)
}
