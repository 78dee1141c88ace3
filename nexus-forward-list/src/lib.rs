//! Singly linked list of opaque payload handles.
//!
//! A [`ForwardList`] owns a chain of [`Node`]s. Each node carries a payload
//! handle: a `Copy` value such as a reference, raw pointer or storage key
//! that refers to data the caller owns. The list moves handles around but
//! never reads through them or releases what they point to.
//!
//! ```text
//! caller data   [ order 7 ]   [ order 3 ]   [ order 9 ]
//!                    ^             ^             ^
//! ForwardList   head -> Node -> Node -> Node -> None     count = 3
//! ```
//!
//! # Quick Start
//!
//! ```
//! use nexus_forward_list::{ForwardList, ListError, create_node};
//!
//! let mut list: ForwardList<u32> = ForwardList::new();
//!
//! list.add_node(create_node(10))?;           // [10]
//! list.add_node_beginning(create_node(5))?;  // [5, 10]
//! list.insert_node(create_node(7), 1)?;      // [5, 7, 10]
//! list.insert_node(create_node(12), 3)?;     // [5, 7, 10, 12]
//!
//! assert_eq!(list.get_node_at(1).map(|n| n.payload()), Some(7));
//! assert_eq!(list.remove_node(2)?, 10);      // [5, 7, 12]
//!
//! assert_eq!(
//!     list.insert_node(create_node(1), 9),
//!     Err(ListError::BadIndex { pos: 9, count: 3 })
//! );
//! # Ok::<(), ListError>(())
//! ```
//!
//! # Ownership
//!
//! - Nodes are created on their own with [`create_node`] (fallible) or
//!   [`Node::new`], then moved into exactly one list by an insertion.
//! - Removal and wipe release nodes. Removal returns the payload handle.
//! - Payload handles are `Copy`, so no list operation can free payload data.
//!
//! # Lifecycle through slots
//!
//! Code that keeps its list behind an optional handle can use the
//! [`lifecycle`] functions, which report a missing list as
//! [`ListError::BadStructure`].
//!
//! # Errors and status codes
//!
//! Mutating operations return `Result<_, ListError>` and never mutate on
//! failure. Constructors and lookups return `Option`. [`Status`] maps results
//! to the numeric codes `0x00..=0x05`.
//!
//! # Diagnostics
//!
//! Lifecycle events (`init`, `deinit`, wipes, count repairs, allocation
//! failures) are emitted through `tracing` under the `nexus_forward_list`
//! target. Nothing is logged per node.

#![warn(missing_docs)]

mod alloc;
pub mod error;
pub mod lifecycle;
pub mod list;
pub mod node;

pub use error::{ListError, Status};
pub use lifecycle::Slot;
pub use list::{ForwardList, Iter, Payloads};
pub use node::{Node, create_node};
