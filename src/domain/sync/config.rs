use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::errors::{SyncError, SyncResult};

/// Tuning knobs for the debounce and the handle animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    /// Quiet interval before a pending value is committed.
    pub debounce_ms: u64,
    /// Interpolation factor used at or beyond `far_distance`.
    pub min_lerp: f64,
    /// Interpolation factor used at or below `close_distance`.
    pub max_lerp: f64,
    pub far_distance: f64,
    pub close_distance: f64,
    /// Largest step, in ticks, the displayed value may take in one frame.
    pub max_tick_speed: f64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 150,
            min_lerp: 0.15,
            max_lerp: 0.4,
            far_distance: 2000.0,
            close_distance: 100.0,
            max_tick_speed: 500.0,
        }
    }
}

impl SyncConfig {
    /// Parse a (possibly partial) JSON document; missing keys keep their defaults.
    pub fn from_json(json: &str) -> SyncResult<Self> {
        let config: SyncConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SyncResult<()> {
        let all_finite = [
            self.min_lerp,
            self.max_lerp,
            self.far_distance,
            self.close_distance,
            self.max_tick_speed,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(SyncError::InvalidConfig("all numeric options must be finite".into()));
        }
        if !(self.min_lerp > 0.0 && self.min_lerp <= self.max_lerp && self.max_lerp <= 1.0) {
            return Err(SyncError::InvalidConfig(format!(
                "expected 0 < minLerp <= maxLerp <= 1, got minLerp={} maxLerp={}",
                self.min_lerp, self.max_lerp
            )));
        }
        if !(self.close_distance >= 0.0 && self.close_distance < self.far_distance) {
            return Err(SyncError::InvalidConfig(format!(
                "expected 0 <= closeDistance < farDistance, got closeDistance={} farDistance={}",
                self.close_distance, self.far_distance
            )));
        }
        if self.max_tick_speed <= 0.0 {
            return Err(SyncError::InvalidConfig(format!(
                "maxTickSpeed must be positive, got {}",
                self.max_tick_speed
            )));
        }
        Ok(())
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Far gaps close slowly, near gaps snap quickly; linear in between.
    pub fn interpolation_factor(&self, distance: f64) -> f64 {
        if distance <= self.close_distance {
            self.max_lerp
        } else if distance >= self.far_distance {
            self.min_lerp
        } else {
            let t = (distance - self.close_distance) / (self.far_distance - self.close_distance);
            self.max_lerp + (self.min_lerp - self.max_lerp) * t
        }
    }

    /// Signed step toward the target for a gap of `diff`, capped at `max_tick_speed`.
    pub fn step_for(&self, diff: f64) -> f64 {
        let step = diff * self.interpolation_factor(diff.abs());
        step.signum() * step.abs().min(self.max_tick_speed)
    }
}
