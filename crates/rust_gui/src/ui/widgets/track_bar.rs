//! Horizontal slider over a numeric range
//!
//! The value maps onto the box width with `max - min + track_width * step`
//! as the full extent, so a thumb `track_width` steps wide still fits at
//! `max`. Dragging reports every intermediate value, not only the final one.

use crate::foundation::math::{Color, Rect, Vec2};
use crate::ui::widget::{Consumer, DrawCx, Supplier, Widget, WidgetCx};
use std::rc::Rc;

/// Slider widget
pub struct TrackBar {
    min: f64,
    max: f64,
    value: f64,
    step: f64,
    track_width: i32,
    track_color: Option<Color>,
    supplier: Option<Supplier<f64>>,
    consumer: Option<Consumer<f64>>,
}

impl std::fmt::Debug for TrackBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackBar")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("step", &self.step)
            .field("track_width", &self.track_width)
            .finish_non_exhaustive()
    }
}

impl TrackBar {
    /// Create a track bar
    pub fn new(min: f64, max: f64, value: f64, step: f64, track_width: i32) -> Self {
        Self {
            min,
            max,
            value,
            step,
            track_width,
            track_color: None,
            supplier: None,
            consumer: None,
        }
    }

    /// Pull the value from `supplier` on every draw
    #[must_use]
    pub fn with_supplier(mut self, supplier: impl Fn() -> f64 + 'static) -> Self {
        self.supplier = Some(Box::new(supplier));
        self
    }

    /// Receive every value produced by dragging
    #[must_use]
    pub fn with_consumer(mut self, consumer: impl Fn(f64) + 'static) -> Self {
        self.consumer = Some(Rc::new(consumer));
        self
    }

    /// Full extent of the value axis
    fn extent(&self) -> f64 {
        self.max - self.min + f64::from(self.track_width) * self.step
    }

    /// Value for a cursor offset from the left edge of a box `width` wide
    ///
    /// Truncated to a multiple of `step` and kept within `[min, max]`; a `min`
    /// that is not itself a multiple of `step` is returned as is.
    pub fn value_at(&self, offset: f64, width: f64) -> f64 {
        let raw = offset / width * self.extent() + self.min;
        let clamped = raw.clamp(self.min, self.max);
        ((clamped / self.step) as i64 as f64 * self.step).clamp(self.min, self.max)
    }

    /// Thumb area for a box at `coord` of `size`
    pub fn thumb(&self, coord: Vec2, size: Vec2) -> Rect {
        let extent = self.extent();
        let t = ((self.value - self.min) / extent) as f32;
        let width = (f64::from(size.x) * (f64::from(self.track_width) / extent * self.step)) as i32;
        Rect::new(coord.x + size.x * t, coord.y, width as f32, size.y)
    }

    /// Current value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Lower bound
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Set the lower bound
    pub fn set_min(&mut self, min: f64) {
        self.min = min;
    }

    /// Upper bound
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Set the upper bound
    pub fn set_max(&mut self, max: f64) {
        self.max = max;
    }

    /// Quantization step
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Set the quantization step
    pub fn set_step(&mut self, step: f64) {
        self.step = step;
    }

    /// Thumb width in steps
    pub fn track_width(&self) -> i32 {
        self.track_width
    }

    /// Set the thumb width in steps
    pub fn set_track_width(&mut self, track_width: i32) {
        self.track_width = track_width;
    }

    /// Thumb color
    pub fn track_color(&self) -> Option<Color> {
        self.track_color
    }

    /// Set the thumb color
    pub fn set_track_color(&mut self, color: Color) {
        self.track_color = Some(color);
    }

    /// Set or clear the supplier
    pub fn set_supplier(&mut self, supplier: Option<Supplier<f64>>) {
        self.supplier = supplier;
    }

    /// Set or clear the consumer
    pub fn set_consumer(&mut self, consumer: Option<Consumer<f64>>) {
        self.consumer = consumer;
    }
}

impl Widget for TrackBar {
    fn init(&mut self, cx: &mut WidgetCx<'_>) {
        let palette = cx.config().palette.clone();
        if self.track_color.is_none() {
            self.track_color = Some(palette.track);
        }
        let node = cx.node_mut();
        node.size = Vec2::new(26.0, 26.0);
        node.color = palette.track_background;
        node.hover_color = palette.track_hover;
    }

    fn draw(&mut self, cx: &mut DrawCx<'_, '_>) {
        if let Some(supplier) = &self.supplier {
            self.value = supplier();
        }
        let node = cx.node();
        let background = if node.hover { node.hover_color } else { node.color };
        let size = node.size;
        cx.fill(background);

        let thumb = self.thumb(cx.coord(), size);
        let color = self.track_color.unwrap_or(background);
        cx.fill_rect(thumb, color);
    }

    fn mouse_move(&mut self, cx: &mut WidgetCx<'_>, x: f32, _y: f32) {
        let width = cx.node().size.x;
        if width <= 0.0 || self.step <= 0.0 {
            return;
        }
        let offset = f64::from(x - cx.coord().x);
        self.value = self.value_at(offset, f64::from(width));
        log::trace!("Track bar {:?} -> {}", cx.id(), self.value);
        if let Some(consumer) = &self.consumer {
            consumer(self.value);
        }
    }
}
