//! Before/after comparison slider
//!
//! This module provides:
//! - `ComparisonSlider`, the pointer-driven `Idle`/`Dragging` state machine
//! - `DocumentSurface` and `DragCapture` for scoped document-level listeners
//! - `SliderView`, the render model and markup for a divider position

mod state;
mod surface;
mod view;

pub use state::{
    BEFORE_LABEL_MIN_POSITION, ComparisonSlider, ContainerRect, DEFAULT_AFTER_LABEL,
    DEFAULT_BEFORE_LABEL, DragPhase, INITIAL_POSITION, PointerInput, SliderImages, SliderState,
};
pub use surface::{DocumentSurface, DragCapture, ListenerId};
pub use view::SliderView;
