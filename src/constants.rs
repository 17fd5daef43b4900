//! Crate-wide constants.
//!
//! Centralizes default option values, class names and the style properties
//! the drag behavior touches on the host element.

// ============================================================================
// Class Names
// ============================================================================

/// Class added to every attached element
pub const DEFAULT_CLASS: &str = "draggable";

/// Class present while a drag is moving the element
pub const DEFAULT_CLASS_DRAGGING: &str = "draggable-dragging";

/// Class added once the element has been dragged at least once
pub const DEFAULT_CLASS_DRAGGED: &str = "draggable-dragged";

// ============================================================================
// Bounds
// ============================================================================

/// Bounds keyword that confines movement to the parent's box
pub const PARENT_BOUNDS_KEYWORD: &str = "parent";

// ============================================================================
// Style Properties
// ============================================================================

/// Written on attach so touch input is delivered as pointer moves instead of panning
pub const TOUCH_ACTION_PROPERTY: &str = "touch-action";

/// Body property suppressed while dragging when the user-select hack is on
pub const USER_SELECT_PROPERTY: &str = "user-select";

/// Property carrying the element's visual offset
pub const TRANSFORM_PROPERTY: &str = "transform";

// ============================================================================
// Timing
// ============================================================================

/// Frame budget for 60 FPS; pointer handlers slower than this are reported
pub const FRAME_BUDGET_MS: f64 = 16.67;
