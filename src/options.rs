//! Drag options - the per-session configuration.
//!
//! Options deserialize from JSON with camelCase keys and every field
//! optional, so a host can pass `{"axis": "x", "grid": [10, 10]}` straight
//! through:
//!
//! ```ignore
//! let options = DragOptions::from_json(r#"{"bounds": "parent", "handle": ".grip"}"#)?;
//! ```

use crate::constants::{
    DEFAULT_CLASS, DEFAULT_CLASS_DRAGGED, DEFAULT_CLASS_DRAGGING, PARENT_BOUNDS_KEYWORD,
};
use crate::error::{DragError, DragResult};
use crate::geometry::{GridSpec, Point};
use serde::{Deserialize, Serialize};

/// Which translation components a drag may change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Both,
    X,
    Y,
    None,
}

impl Axis {
    #[inline]
    pub fn allows_x(self) -> bool {
        matches!(self, Axis::Both | Axis::X)
    }

    #[inline]
    pub fn allows_y(self) -> bool {
        matches!(self, Axis::Both | Axis::Y)
    }
}

/// Insets measured inward from each viewport edge
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsInsets {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Region the dragged element must stay inside
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BoundsRepr", into = "BoundsRepr")]
pub enum Bounds {
    /// The element's immediate parent box
    Parent,
    /// First element in the document matching the selector
    Selector(String),
    /// Viewport minus insets
    Insets(BoundsInsets),
}

/// Wire shape: either a string (keyword or selector) or an inset object
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BoundsRepr {
    Keyword(String),
    Insets(BoundsInsets),
}

impl From<BoundsRepr> for Bounds {
    fn from(repr: BoundsRepr) -> Self {
        match repr {
            BoundsRepr::Keyword(keyword) if keyword == PARENT_BOUNDS_KEYWORD => Bounds::Parent,
            BoundsRepr::Keyword(selector) => Bounds::Selector(selector),
            BoundsRepr::Insets(insets) => Bounds::Insets(insets),
        }
    }
}

impl From<Bounds> for BoundsRepr {
    fn from(bounds: Bounds) -> Self {
        match bounds {
            Bounds::Parent => BoundsRepr::Keyword(PARENT_BOUNDS_KEYWORD.to_string()),
            Bounds::Selector(selector) => BoundsRepr::Keyword(selector),
            Bounds::Insets(insets) => BoundsRepr::Insets(insets),
        }
    }
}

impl From<&str> for Bounds {
    fn from(keyword: &str) -> Self {
        Bounds::from(BoundsRepr::Keyword(keyword.to_string()))
    }
}

/// Class names toggled on the element for styling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    #[serde(rename = "defaultClass")]
    pub main: String,
    #[serde(rename = "defaultClassDragging")]
    pub dragging: String,
    #[serde(rename = "defaultClassDragged")]
    pub dragged: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            main: DEFAULT_CLASS.to_string(),
            dragging: DEFAULT_CLASS_DRAGGING.to_string(),
            dragged: DEFAULT_CLASS_DRAGGED.to_string(),
        }
    }
}

/// Configuration for one drag session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    pub axis: Axis,
    /// Place with `translate3d` instead of `translate`
    pub gpu_acceleration: bool,
    /// Disable text selection on the body while a drag is active
    pub apply_user_select_hack: bool,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(flatten)]
    pub classes: ClassNames,
    pub default_position: Point,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            bounds: None,
            axis: Axis::Both,
            gpu_acceleration: true,
            apply_user_select_hack: true,
            disabled: false,
            grid: None,
            cancel: None,
            handle: None,
            classes: ClassNames::default(),
            default_position: Point::ZERO,
        }
    }
}

impl DragOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> DragResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks that need no element tree. Grid cells are not
    /// checked here; they fail on the first snapped move.
    pub fn validate(&self) -> DragResult<()> {
        if let (Some(handle), Some(cancel)) = (&self.handle, &self.cancel) {
            if handle == cancel {
                return Err(DragError::ConflictingSelectors {
                    selector: handle.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn with_bounds(mut self, bounds: impl Into<Bounds>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_grid(mut self, x: f64, y: f64) -> Self {
        self.grid = Some(GridSpec::new(x, y));
        self
    }

    pub fn with_handle(mut self, selector: impl Into<String>) -> Self {
        self.handle = Some(selector.into());
        self
    }

    pub fn with_cancel(mut self, selector: impl Into<String>) -> Self {
        self.cancel = Some(selector.into());
        self
    }

    pub fn with_default_position(mut self, x: f64, y: f64) -> Self {
        self.default_position = Point::new(x, y);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_gpu_acceleration(mut self, enabled: bool) -> Self {
        self.gpu_acceleration = enabled;
        self
    }

    pub fn with_user_select_hack(mut self, enabled: bool) -> Self {
        self.apply_user_select_hack = enabled;
        self
    }

    pub fn with_classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes;
        self
    }
}

impl From<BoundsInsets> for Bounds {
    fn from(insets: BoundsInsets) -> Self {
        Bounds::Insets(insets)
    }
}
