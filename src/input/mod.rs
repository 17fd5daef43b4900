//! Pointer input handling for a drag session.
//!
//! ## Architecture
//!
//! The session tracks its interaction mode with an explicit state machine
//! (`DragState`): no booleans to keep in sync, and per-drag data only exists
//! while a drag does.
//!
//! ## Modules
//!
//! - `state` - Idle/Dragging state machine
//! - `pointer_down` - target checks, bounds resolution, drag start
//! - `drag` - move handling: bounds clamp, grid snap, axis lock
//! - `pointer_up` - drag end

mod drag;
mod pointer_down;
mod pointer_up;
mod state;

pub use state::{ActiveDrag, DragState};
