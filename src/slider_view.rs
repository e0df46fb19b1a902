use crate::domain::ticks::{BoundPair, Tick, TickSnapshot};

/// Visible tick window of the price-range slider and its pixel mapping.
///
/// Clamping to the window happens here, on the pointer side. The synchronizer
/// itself accepts any tick it is given.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderView {
    pub min_tick: f64,
    pub max_tick: f64,
    pub width_px: f64,
    pub tick_spacing: i32,
}

impl SliderView {
    pub fn new(min_tick: f64, max_tick: f64, width_px: f64, tick_spacing: i32) -> Self {
        Self { min_tick, max_tick, width_px, tick_spacing }
    }

    pub fn span(&self) -> f64 {
        self.max_tick - self.min_tick
    }

    pub fn tick_to_px(&self, tick: f64) -> f64 {
        if self.span() == 0.0 {
            return 0.0;
        }
        (tick - self.min_tick) / self.span() * self.width_px
    }

    /// Pointer position to the closest tick the pool accepts.
    pub fn px_to_tick(&self, px: f64) -> Tick {
        if self.width_px <= 0.0 {
            return nearest_usable_tick(self.min_tick, self.tick_spacing);
        }
        let px = px.clamp(0.0, self.width_px);
        let raw = self.min_tick + px / self.width_px * self.span();
        nearest_usable_tick(raw, self.tick_spacing)
    }

    /// Pixel positions of both handles for the displayed (animated) ticks.
    pub fn handle_positions(&self, snapshot: TickSnapshot) -> BoundPair<Option<f64>> {
        BoundPair::new(
            snapshot.internal_lower_tick.map(|tick| self.tick_to_px(tick)),
            snapshot.internal_upper_tick.map(|tick| self.tick_to_px(tick)),
        )
    }

    /// Zoom keeping the tick under `anchor_ratio` of the width in place.
    /// `factor > 1` zooms in.
    pub fn zoom_at(&mut self, factor: f64, anchor_ratio: f64) {
        if factor <= 0.0 {
            return;
        }
        let anchor = self.min_tick + self.span() * anchor_ratio;
        let new_span = self.span() / factor;
        self.min_tick = anchor - new_span * anchor_ratio;
        self.max_tick = self.min_tick + new_span;
    }

    /// Pan by pixel delta; dragging right reveals lower ticks.
    pub fn pan(&mut self, delta_px: f64) {
        if self.width_px <= 0.0 {
            return;
        }
        let delta_ticks = delta_px / self.width_px * self.span();
        self.min_tick -= delta_ticks;
        self.max_tick -= delta_ticks;
    }
}

pub fn nearest_usable_tick(tick: f64, tick_spacing: i32) -> Tick {
    let spacing = tick_spacing.max(1) as f64;
    Tick::from(((tick / spacing).round() * spacing) as i32)
}
