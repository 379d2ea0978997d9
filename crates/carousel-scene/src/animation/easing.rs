//! Easing functions for animation timing.
//!
//! Supported curves:
//! - Linear
//! - Ease, EaseIn, EaseOut, EaseInOut (standard CSS curves)
//! - CubicOut (polynomial deceleration, the default for slot moves)
//! - CubicBezier (custom bezier curves)
//! - Steps (stepped animations)
//!
//! # Usage
//!
//! ```
//! use carousel_scene::animation::easing::EasingFunction;
//!
//! let ease: EasingFunction = "cubic-out".parse().unwrap();
//! let progress = ease.evaluate(0.5);
//! assert!(progress > 0.5);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CarouselError;

/// Where the jump happens inside each interval of a stepped easing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepPosition {
    /// Jump at the start of each interval.
    Start,
    /// Jump at the end of each interval.
    #[default]
    End,
}

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingFunction {
    Linear,
    /// CSS `ease`, `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
    #[default]
    Ease,
    /// CSS `ease-in`, `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// CSS `ease-out`, `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// CSS `ease-in-out`, `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// `1 - (1 - t)^3`: fast start, long settle.
    CubicOut,
    /// Custom cubic bezier; x control values must lie in `[0, 1]`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Discrete jumps; `count` is at least 1.
    Steps { count: u32, position: StepPosition },
}

impl EasingFunction {
    /// Evaluate at progress `t`; inputs outside `[0, 1]` are clamped.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Self::Linear => t,
            Self::Ease => Bezier::new(0.25, 0.1, 0.25, 1.0).at(t),
            Self::EaseIn => Bezier::new(0.42, 0.0, 1.0, 1.0).at(t),
            Self::EaseOut => Bezier::new(0.0, 0.0, 0.58, 1.0).at(t),
            Self::EaseInOut => Bezier::new(0.42, 0.0, 0.58, 1.0).at(t),
            Self::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::CubicBezier { x1, y1, x2, y2 } => Bezier::new(x1, y1, x2, y2).at(t),
            Self::Steps { count, position } => steps(count, position, t),
        }
    }

    /// Custom cubic bezier easing.
    ///
    /// # Panics
    /// Panics if `x1` or `x2` fall outside `[0, 1]`.
    pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "Bezier x values must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Stepped easing.
    ///
    /// # Panics
    /// Panics if `count` is 0.
    pub fn steps(count: u32, position: StepPosition) -> Self {
        assert!(count >= 1, "Steps must be at least 1");
        Self::Steps { count, position }
    }
}

impl FromStr for EasingFunction {
    type Err = CarouselError;

    /// Accepts CSS names (`ease-out`), tween-library names (`cubic.out`,
    /// `power2.out`) and `cubic-bezier(x1, y1, x2, y2)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let easing = match name.as_str() {
            "linear" | "none" => Self::Linear,
            "ease" => Self::Ease,
            "ease-in" | "ease_in" => Self::EaseIn,
            "ease-out" | "ease_out" => Self::EaseOut,
            "ease-in-out" | "ease_in_out" => Self::EaseInOut,
            "cubic-out" | "cubic_out" | "cubic.out" | "power2.out" => Self::CubicOut,
            _ => return parse_bezier(&name).ok_or_else(|| CarouselError::UnknownEasing(s.to_string())),
        };
        Ok(easing)
    }
}

fn parse_bezier(name: &str) -> Option<EasingFunction> {
    let args = name.strip_prefix("cubic-bezier(")?.strip_suffix(')')?;
    let values: Vec<f32> = args
        .split(',')
        .map(|v| v.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;
    match values.as_slice() {
        &[x1, y1, x2, y2]
            if (0.0..=1.0).contains(&x1)
                && (0.0..=1.0).contains(&x2)
                && y1.is_finite()
                && y2.is_finite() =>
        {
            Some(EasingFunction::CubicBezier { x1, y1, x2, y2 })
        }
        _ => None,
    }
}

/// Cubic bezier through (0,0) and (1,1) with two control points.
struct Bezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl Bezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn at(&self, progress: f32) -> f32 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        let s = self.solve_x(progress);
        component(self.y1, self.y2, s)
    }

    /// Newton-Raphson for the curve parameter whose x equals `target`.
    fn solve_x(&self, target: f32) -> f32 {
        let mut s = target;
        for _ in 0..8 {
            let err = component(self.x1, self.x2, s) - target;
            if err.abs() < 1e-6 {
                break;
            }
            let slope = derivative(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s = (s - err / slope).clamp(0.0, 1.0);
        }
        s
    }
}

/// One coordinate of the curve: `3(1-s)²s·p1 + 3(1-s)s²·p2 + s³`.
#[inline]
fn component(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

#[inline]
fn derivative(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

fn steps(count: u32, position: StepPosition, t: f32) -> f32 {
    let n = count.max(1) as f32;
    match position {
        StepPosition::Start => (t * n).ceil() / n,
        StepPosition::End => (t * n).floor() / n,
    }
}
