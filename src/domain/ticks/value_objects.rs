use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Value Object - discrete price point on the pool's price curve
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}", _0)]
pub struct Tick(i32);

impl Tick {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

/// Which end of the price range a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum TickBound {
    #[display(fmt = "lower")]
    #[strum(serialize = "lower")]
    Lower,
    #[display(fmt = "upper")]
    #[strum(serialize = "upper")]
    Upper,
}

impl TickBound {
    pub fn all() -> impl Iterator<Item = TickBound> {
        TickBound::iter()
    }
}

/// One value per bound, addressable by `TickBound`
#[derive(Debug, Clone, Copy, PartialEq, Default, Constructor)]
pub struct BoundPair<T> {
    pub lower: T,
    pub upper: T,
}

impl<T> BoundPair<T> {
    pub fn iter(&self) -> impl Iterator<Item = (TickBound, &T)> {
        [(TickBound::Lower, &self.lower), (TickBound::Upper, &self.upper)].into_iter()
    }
}

impl<T> Index<TickBound> for BoundPair<T> {
    type Output = T;

    fn index(&self, bound: TickBound) -> &T {
        match bound {
            TickBound::Lower => &self.lower,
            TickBound::Upper => &self.upper,
        }
    }
}

impl<T> IndexMut<TickBound> for BoundPair<T> {
    fn index_mut(&mut self, bound: TickBound) -> &mut T {
        match bound {
            TickBound::Lower => &mut self.lower,
            TickBound::Upper => &mut self.upper,
        }
    }
}

/// Inbound props supplied by the host on every render
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RangeProps {
    pub lower_tick: Option<Tick>,
    pub upper_tick: Option<Tick>,
    pub is_dragging: bool,
}

impl RangeProps {
    pub fn new(lower_tick: Option<i32>, upper_tick: Option<i32>, is_dragging: bool) -> Self {
        Self {
            lower_tick: lower_tick.map(Tick::from),
            upper_tick: upper_tick.map(Tick::from),
            is_dragging,
        }
    }

    pub fn tick(&self, bound: TickBound) -> Option<Tick> {
        match bound {
            TickBound::Lower => self.lower_tick,
            TickBound::Upper => self.upper_tick,
        }
    }
}

/// Authoritative, non-animated intended values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetTicks {
    pub lower_tick: Option<Tick>,
    pub upper_tick: Option<Tick>,
}

/// Displayed values published for rendering
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickSnapshot {
    pub internal_lower_tick: Option<f64>,
    pub internal_upper_tick: Option<f64>,
}

/// Outbound request to persist a value through the host's commit function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct Commit {
    pub bound: TickBound,
    pub tick: Tick,
}
