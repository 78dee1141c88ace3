// nexus-forward-list/src/error.rs

//! Error and status types for list operations.
//!
//! Fallible list operations return [`ListError`]. Callers that need the
//! numeric status codes (for example across an FFI boundary or in a log line)
//! convert with [`Status::from_result`] or [`ListError::status`].

/// Failure of a list operation.
///
/// Validation happens before any mutation, so a returned error means the
/// list is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The list handle is absent (empty slot or missing slot reference).
    #[error("list handle is absent")]
    BadStructure,

    /// The list has no nodes to operate on.
    #[error("not enough nodes in the list")]
    NotEnoughNodes,

    /// The position is outside the list.
    #[error("position {pos} is out of bounds for a list of {count} nodes")]
    BadIndex {
        /// Requested position.
        pos: usize,
        /// Node count at the time of the call.
        count: usize,
    },

    /// The node is absent, or still links to a successor.
    #[error("node is absent or still linked to a successor")]
    BadNode,

    /// Memory for a node or list could not be allocated.
    #[error("failed to allocate memory")]
    AllocationFailure,
}

impl ListError {
    /// Returns the status code for this error.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::BadStructure => Status::BadStructure,
            Self::NotEnoughNodes => Status::NotEnoughNodes,
            Self::BadIndex { .. } => Status::BadIndex,
            Self::BadNode => Status::BadNode,
            Self::AllocationFailure => Status::AllocationFailure,
        }
    }

    /// Returns the raw status code for this error.
    #[must_use]
    pub const fn code(&self) -> u8 {
        self.status() as u8
    }
}

/// Numeric status of a list operation.
///
/// ```
/// use nexus_forward_list::{ForwardList, Status, create_node};
///
/// let mut list: ForwardList<u32> = ForwardList::new();
/// assert_eq!(Status::from_result(&list.remove_node_beginning()), Status::NotEnoughNodes);
/// assert_eq!(Status::from_result(&list.add_node(create_node(7))), Status::Ok);
/// assert_eq!(Status::NotEnoughNodes.code(), 0x02);
/// ```
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Action successful.
    Ok = 0x00,
    /// The list handle is absent.
    BadStructure = 0x01,
    /// Not enough nodes.
    NotEnoughNodes = 0x02,
    /// Position out of bounds.
    BadIndex = 0x03,
    /// The node is absent or still linked.
    BadNode = 0x04,
    /// Allocation failed.
    AllocationFailure = 0x05,
}

impl Status {
    /// Returns the status of an operation result.
    #[must_use]
    pub const fn from_result<T>(result: &Result<T, ListError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => err.status(),
        }
    }

    /// Returns the raw code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` for [`Status::Ok`].
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<ListError> for Status {
    fn from(err: ListError) -> Self {
        err.status()
    }
}

impl TryFrom<u8> for Status {
    type Error = u8;

    /// Parses a raw code, handing back codes that name no status.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(Self::Ok),
            0x01 => Ok(Self::BadStructure),
            0x02 => Ok(Self::NotEnoughNodes),
            0x03 => Ok(Self::BadIndex),
            0x04 => Ok(Self::BadNode),
            0x05 => Ok(Self::AllocationFailure),
            other => Err(other),
        }
    }
}
