//! Geometry values exchanged between a component, its foundation and the surface

use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal extent of a tab's indicator, passed into `activate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorBounds {
    pub width: f64,
    pub left: f64,
}

impl IndicatorBounds {
    pub fn new(width: f64, left: f64) -> Self {
        Self { width, left }
    }
}

/// Snapshot of an element's rendered geometry. Produced on demand, never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal extent, suitable for the next tab's `activate` call
    pub fn bounds(&self) -> IndicatorBounds {
        IndicatorBounds {
            width: self.width,
            left: self.left,
        }
    }
}

/// Relative transform that places the bar over the previous tab's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorTransform {
    pub translate_x: f64,
    pub scale_x: f64,
}

impl IndicatorTransform {
    /// Transform from `current` back to `previous`.
    ///
    /// Returns `None` when the current width cannot be divided by, in which
    /// case there is no meaningful starting position to slide from.
    pub fn between(previous: IndicatorBounds, current: IndicatorBounds) -> Option<Self> {
        if !current.width.is_finite() || current.width <= 0.0 {
            return None;
        }

        let transform = Self {
            translate_x: previous.left - current.left,
            scale_x: previous.width / current.width,
        };

        if transform.translate_x.is_finite() && transform.scale_x.is_finite() {
            Some(transform)
        } else {
            None
        }
    }

    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0 && self.scale_x == 1.0
    }
}

impl fmt::Display for IndicatorTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateX({}px) scaleX({})",
            self.translate_x, self.scale_x
        )
    }
}
