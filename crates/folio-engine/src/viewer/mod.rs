//! # Annotated Code Viewer state
//!
//! UI-free pieces of the annotated code viewer, so they can be driven and
//! tested without a renderer.
//!
//! - **`annotations`**: `AnnotationIndex` maps rendered lines to annotations
//! - **`state`**: `ViewerState` hover/selection state machine
//! - **`tooltip`**: `TooltipAnchor` placement from a line's bounding box
//! - **`loader`**: `CodeLoader` lazy code fetch with stale-result protection

pub mod annotations;
pub mod loader;
pub mod state;
pub mod tooltip;

pub use annotations::AnnotationIndex;
pub use loader::{CodeLoader, CodeRequest, FetchTicket, LoadOutcome};
pub use state::{Interaction, ViewerState};
pub use tooltip::{LineRect, TOOLTIP_GAP, TooltipAnchor};
