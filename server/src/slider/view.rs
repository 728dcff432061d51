//! Render model for the comparison slider

use super::state::{BEFORE_LABEL_MIN_POSITION, SliderImages};
use crate::site::html::{escape, percent};

/// Everything needed to draw the slider at one divider position.
///
/// The "after" image is the base layer; the "before" image is clipped to the
/// left `position` percent; the handle sits at `position` percent.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderView {
    pub images: SliderImages,
    pub position: f64,
}

impl SliderView {
    pub fn new(images: SliderImages, position: f64) -> Self {
        Self { images, position }
    }

    /// CSS clip region revealing the left `position` percent of the before image
    pub fn before_clip_path(&self) -> String {
        format!("inset(0 {}% 0 0)", percent(100.0 - self.position))
    }

    /// CSS left offset of the divider handle
    pub fn handle_left(&self) -> String {
        format!("{}%", percent(self.position))
    }

    pub fn before_label_visible(&self) -> bool {
        self.position >= BEFORE_LABEL_MIN_POSITION
    }

    /// Markup for the slider container. The `data-slider` attributes are the
    /// render contract for a client host that wires pointer events.
    pub fn to_html(&self) -> String {
        let before_label = escape(&self.images.before_label);
        let after_label = escape(&self.images.after_label);
        let label_opacity = if self.before_label_visible() { 1 } else { 0 };
        format!(
            r#"<div class="comparison-slider" data-slider data-position="{position}">
  <img class="slider-after" src="{after_src}" alt="{after_label}" draggable="false">
  <span class="slider-label slider-label-after">{after_label}</span>
  <img class="slider-before" src="{before_src}" alt="{before_label}" draggable="false" style="clip-path: {clip}">
  <span class="slider-label slider-label-before" style="opacity: {label_opacity}; transition: opacity 0.2s">{before_label}</span>
  <div class="slider-handle" style="left: {handle}"><span class="slider-grip"></span></div>
</div>"#,
            position = percent(self.position),
            after_src = escape(&self.images.after_src),
            before_src = escape(&self.images.before_src),
            clip = self.before_clip_path(),
            handle = self.handle_left(),
        )
    }
}
