//! Engine-wide constants.
//!
//! These values are part of the document and view contracts and are not user
//! configurable. Tunables that are configurable live in `lichtplan-settings` and
//! default to the values below.

/// Smallest allowed view scale.
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed view scale.
pub const MAX_SCALE: f64 = 5.0;

/// Scale factor applied by the zoom in / zoom out buttons.
pub const ZOOM_STEP: f64 = 1.2;

/// Scale factor applied per mouse wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.08;

/// Padding in screen pixels kept on each side of the viewport by zoom-to-fit.
pub const VIEW_PADDING: f64 = 40.0;

/// Number of undo steps retained by default.
pub const MAX_HISTORY: usize = 50;

/// Document-space offset applied on both axes to a duplicated symbol.
pub const DUPLICATE_OFFSET: f64 = 30.0;

/// Name given to a freshly created project.
pub const DEFAULT_PROJECT_NAME: &str = "Nieuw project";

/// Name given to the first floor of a freshly created project.
pub const DEFAULT_FLOOR_NAME: &str = "Begane grond";
