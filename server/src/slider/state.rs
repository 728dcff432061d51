//! Comparison slider state machine
//!
//! States are `Idle` and `Dragging`. A pointer-down (or touch-start) inside the
//! container starts a drag session and immediately moves the divider. While
//! dragging, moves anywhere in the document update the divider; an up anywhere
//! ends the session.

use tracing::debug;

use super::surface::{DocumentSurface, DragCapture, ListenerId};
use super::view::SliderView;

/// Divider position on mount, in percent of container width
pub const INITIAL_POSITION: f64 = 50.0;

/// The "before" label is shown once the divider reaches this position
pub const BEFORE_LABEL_MIN_POSITION: f64 = 10.0;

pub const DEFAULT_BEFORE_LABEL: &str = "Original";
pub const DEFAULT_AFTER_LABEL: &str = "Coloring Page";

/// Horizontal geometry of the slider container in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub width: f64,
}

impl ContainerRect {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Map a client x coordinate to a clamped divider position.
    ///
    /// Returns `None` for zero-width or non-finite geometry; callers leave the
    /// position unchanged in that case.
    pub fn position_for(&self, client_x: f64) -> Option<f64> {
        if !self.left.is_finite() || !self.width.is_finite() || !client_x.is_finite() {
            return None;
        }
        if self.width <= 0.0 {
            return None;
        }
        let percentage = (client_x - self.left) / self.width * 100.0;
        Some(percentage.clamp(0.0, 100.0))
    }
}

/// Pointer input carried by a down/move event
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mouse or pen pointer at a client x coordinate
    Mouse { client_x: f64 },
    /// Touch event with the client x of every active touch point
    Touch { touches: Vec<f64> },
}

impl PointerInput {
    pub fn mouse(client_x: f64) -> Self {
        Self::Mouse { client_x }
    }

    pub fn touch(client_x: f64) -> Self {
        Self::Touch {
            touches: vec![client_x],
        }
    }

    /// The coordinate that drives the divider: the mouse, or the first touch.
    pub fn primary_x(&self) -> Option<f64> {
        match self {
            Self::Mouse { client_x } => Some(*client_x),
            Self::Touch { touches } => touches.first().copied(),
        }
    }
}

/// Drag phase of the slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Snapshot of the slider's transient state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    pub position: f64,
    pub is_dragging: bool,
}

/// Image sources and labels of a comparison slider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderImages {
    pub before_src: String,
    pub after_src: String,
    pub before_label: String,
    pub after_label: String,
}

/// Before/after comparison slider
#[derive(Debug)]
pub struct ComparisonSlider {
    images: SliderImages,
    position: f64,
    capture: Option<DragCapture>,
}

impl ComparisonSlider {
    /// Create a slider with the default labels.
    pub fn new(before_src: impl Into<String>, after_src: impl Into<String>) -> Self {
        Self {
            images: SliderImages {
                before_src: before_src.into(),
                after_src: after_src.into(),
                before_label: DEFAULT_BEFORE_LABEL.to_string(),
                after_label: DEFAULT_AFTER_LABEL.to_string(),
            },
            position: INITIAL_POSITION,
            capture: None,
        }
    }

    pub fn with_labels(
        mut self,
        before_label: impl Into<String>,
        after_label: impl Into<String>,
    ) -> Self {
        self.images.before_label = before_label.into();
        self.images.after_label = after_label.into();
        self
    }

    pub fn images(&self) -> &SliderImages {
        &self.images
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.capture.is_some()
    }

    pub fn phase(&self) -> DragPhase {
        if self.is_dragging() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn state(&self) -> SliderState {
        SliderState {
            position: self.position,
            is_dragging: self.is_dragging(),
        }
    }

    /// Document listener held by the active drag session, if any
    pub fn listener(&self) -> Option<ListenerId> {
        self.capture.as_ref().map(DragCapture::id)
    }

    /// Pointer-down or touch-start inside the container.
    pub fn pointer_down(
        &mut self,
        surface: &DocumentSurface,
        rect: ContainerRect,
        input: &PointerInput,
    ) {
        if self.capture.is_none() {
            let capture = surface.capture();
            debug!(
                "Slider drag started (listener {:?}) at position {:.2}",
                capture.id(),
                self.position
            );
            self.capture = Some(capture);
        }
        self.track(rect, input);
    }

    /// Pointer-move or touch-move delivered from anywhere in the document.
    ///
    /// Ignored unless a drag session is active.
    pub fn document_move(&mut self, rect: ContainerRect, input: &PointerInput) {
        if self.capture.is_some() {
            self.track(rect, input);
        }
    }

    /// Pointer-up or touch-end delivered from anywhere in the document.
    pub fn document_up(&mut self) {
        if let Some(capture) = self.capture.take() {
            debug!(
                "Slider drag ended (listener {:?}) at position {:.2}",
                capture.id(),
                self.position
            );
        }
    }

    fn track(&mut self, rect: ContainerRect, input: &PointerInput) {
        if let Some(position) = input.primary_x().and_then(|x| rect.position_for(x)) {
            self.position = position;
        }
    }

    /// Render model for the current position
    pub fn view(&self) -> SliderView {
        SliderView::new(self.images.clone(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const EPSILON: f64 = 1e-9;

    fn rect() -> ContainerRect {
        ContainerRect::new(0.0, 400.0)
    }

    fn slider() -> ComparisonSlider {
        ComparisonSlider::new("/dog-photo.png", "/dog-sketch.png")
    }

    #[test]
    fn test_initial_state() {
        let slider = slider();
        assert_eq!(slider.position(), 50.0);
        assert_eq!(slider.phase(), DragPhase::Idle);
        assert_eq!(slider.images().before_label, "Original");
        assert_eq!(slider.images().after_label, "Coloring Page");
    }

    #[test]
    fn test_position_is_always_clamped() {
        let mut rng = rand::rng();
        let rect = ContainerRect::new(120.0, 640.0);
        for _ in 0..1000 {
            let x: f64 = rng.random_range(-10_000.0..10_000.0);
            let position = rect.position_for(x).unwrap();
            assert!((0.0..=100.0).contains(&position), "x={x} -> {position}");
        }
    }

    #[test]
    fn test_pointer_down_sets_position_without_move() {
        let surface = DocumentSurface::new();
        let rect = ContainerRect::new(200.0, 500.0);
        for fraction in [0.0, 0.1, 0.37, 0.5, 0.9, 1.0] {
            let mut slider = slider();
            slider.pointer_down(&surface, rect, &PointerInput::mouse(200.0 + 500.0 * fraction));
            assert!((slider.position() - 100.0 * fraction).abs() < EPSILON);
            assert!(slider.is_dragging());
            slider.document_up();
        }
    }

    #[test]
    fn test_moves_outside_container_update_while_dragging() {
        let surface = DocumentSurface::new();
        let mut slider = slider();
        slider.pointer_down(&surface, rect(), &PointerInput::mouse(200.0));

        slider.document_move(rect(), &PointerInput::mouse(-300.0));
        assert_eq!(slider.position(), 0.0);

        slider.document_move(rect(), &PointerInput::touch(1_000.0));
        assert_eq!(slider.position(), 100.0);
    }

    #[test]
    fn test_move_after_up_is_ignored() {
        let surface = DocumentSurface::new();
        let mut slider = slider();
        slider.pointer_down(&surface, rect(), &PointerInput::mouse(300.0));
        slider.document_up();

        slider.document_move(rect(), &PointerInput::mouse(20.0));
        assert_eq!(slider.position(), 75.0);
        assert_eq!(slider.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_move_without_down_is_ignored() {
        let mut slider = slider();
        slider.document_move(rect(), &PointerInput::mouse(0.0));
        assert_eq!(slider.position(), INITIAL_POSITION);
    }

    #[test]
    fn test_zero_width_container_is_noop() {
        let surface = DocumentSurface::new();
        let mut slider = slider();
        slider.pointer_down(&surface, ContainerRect::new(0.0, 0.0), &PointerInput::mouse(10.0));
        assert_eq!(slider.position(), INITIAL_POSITION);
        assert!(slider.is_dragging());

        slider.document_move(ContainerRect::new(0.0, f64::NAN), &PointerInput::mouse(10.0));
        assert_eq!(slider.position(), INITIAL_POSITION);
    }

    #[test]
    fn test_touch_without_points_is_noop() {
        let surface = DocumentSurface::new();
        let mut slider = slider();
        slider.pointer_down(&surface, rect(), &PointerInput::Touch { touches: vec![] });
        assert!(slider.is_dragging());
        assert_eq!(slider.position(), INITIAL_POSITION);
    }

    #[test]
    fn test_last_move_before_up_wins() {
        let surface = DocumentSurface::new();
        let mut slider = slider();
        slider.pointer_down(&surface, rect(), &PointerInput::mouse(0.0));
        for x in [40.0, 80.0, 120.0, 160.0] {
            slider.document_move(rect(), &PointerInput::mouse(x));
        }
        slider.document_up();
        assert_eq!(slider.position(), 40.0);
    }

    #[test]
    fn test_drag_holds_listener_only_while_dragging() {
        let surface = DocumentSurface::new();
        let mut slider = slider();
        assert_eq!(surface.listener_count(), 0);

        slider.pointer_down(&surface, rect(), &PointerInput::mouse(100.0));
        let listener = slider.listener().unwrap();
        assert!(surface.is_attached(listener));

        // A second down during the same session keeps the single registration
        slider.pointer_down(&surface, rect(), &PointerInput::mouse(120.0));
        assert_eq!(surface.listener_count(), 1);

        slider.document_up();
        assert!(!surface.is_attached(listener));
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn test_teardown_mid_drag_releases_listener() {
        let surface = DocumentSurface::new();
        let mut slider = slider();
        slider.pointer_down(&surface, rect(), &PointerInput::mouse(100.0));
        assert_eq!(surface.listener_count(), 1);

        drop(slider);
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn test_end_to_end_drag_scenario() {
        let surface = DocumentSurface::new();
        let rect = ContainerRect::new(0.0, 400.0);
        let mut slider = slider();

        slider.pointer_down(&surface, rect, &PointerInput::mouse(100.0));
        assert!((slider.position() - 25.0).abs() < EPSILON);

        slider.document_move(rect, &PointerInput::mouse(500.0));
        assert_eq!(slider.position(), 100.0);

        slider.document_up();
        assert!(!slider.is_dragging());

        slider.document_move(rect, &PointerInput::mouse(0.0));
        assert_eq!(slider.position(), 100.0);
    }
}
