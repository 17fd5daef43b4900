//! Error types for drag operations
//!
//! Every failure here is a configuration or usage error detected
//! synchronously while handling an attach, update or pointer event.

use crate::host::NodeId;
use thiserror::Error;

/// Errors that can occur while attaching, updating or dragging
#[derive(Error, Debug)]
pub enum DragError {
    /// `handle` and `cancel` name the same selector
    #[error("`handle` selector can't be the same as `cancel` selector ({selector:?})")]
    ConflictingSelectors { selector: String },

    /// The cancel zone contains the handle, so no drag could ever start
    #[error("element matched by `handle` can't be inside the element matched by `cancel`")]
    NestedCancel,

    /// `handle` matches no descendant of the dragged element
    #[error("selector {0:?} passed for `handle` matches no child of the dragged element")]
    HandleNotFound(String),

    /// `cancel` matches no descendant of the dragged element
    #[error("selector {0:?} passed for `cancel` matches no child of the dragged element")]
    CancelNotFound(String),

    /// Bounds selector matches nothing in the document
    #[error("selector {0:?} provided for bounds doesn't exist in the document")]
    BoundsSelectorNotFound(String),

    /// `"parent"` bounds on an element without a parent
    #[error("element {0} has no parent to use as bounds")]
    MissingParent(NodeId),

    /// Grid cell is zero, negative or not finite
    #[error("{axis} grid cell must be a positive number, got {value}")]
    InvalidGrid { axis: &'static str, value: f64 },

    /// Selector syntax outside the supported subset
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Element id that does not belong to the document
    #[error("unknown element {0}")]
    UnknownElement(NodeId),

    /// Operation on a handle whose session was already detached
    #[error("draggable on element {0} is detached")]
    Detached(NodeId),

    /// Options document could not be parsed
    #[error("invalid drag options: {0}")]
    Options(#[from] serde_json::Error),
}

/// Result type alias for drag operations
pub type DragResult<T> = Result<T, DragError>;

impl DragError {
    pub(crate) fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        DragError::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
}
