//! Pointer-driven element dragging.
//!
//! Attach to an element, feed it pointer and touch events, and it tracks a
//! 2D translation for the element constrained by axis locks, bounds and grid
//! snapping, emitting `drag-start`, `drag` and `drag-end` along the way.
//!
//! ## Modules
//!
//! - `geometry` - points, rectangles, clamping and grid snapping
//! - `options` - session configuration, loadable from JSON
//! - `bounds` / `target` - movement region and handle/cancel resolution
//! - `input` - the drag state machine and its pointer handlers
//! - `session` - per-element state owning the state machine
//! - `attach` - document listener wiring, update and detach
//! - `dom` - in-memory document implementing the `host::DragHost` seam

pub mod attach;
pub mod bounds;
pub mod constants;
pub mod dom;
pub mod error;
pub mod events;
pub mod geometry;
pub mod host;
pub mod input;
pub mod logging;
pub mod options;
pub mod perf;
pub mod placement;
pub mod session;
pub mod spatial_index;
pub mod target;

pub use attach::{Draggable, attach};
pub use dom::{Document, ElementSpec, ElementTree};
pub use error::{DragError, DragResult};
pub use events::{DragEvent, DragEventKind, NativeEventType, PointerEvent};
pub use geometry::{GridSpec, Point, Rect, Size};
pub use host::{DragHost, NodeId};
pub use options::{Axis, Bounds, BoundsInsets, ClassNames, DragOptions};
pub use session::DragSession;
