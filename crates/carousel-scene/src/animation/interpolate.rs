//! Interpolation between animatable values.

/// Types that can be blended between two values.
///
/// `t = 0.0` yields `self`, `t = 1.0` yields `to`; eased progress may
/// overshoot either end.
pub trait Interpolate: Sized {
    fn interpolate(&self, to: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    #[inline]
    fn interpolate(&self, to: &Self, t: f32) -> Self {
        self + (to - self) * t
    }
}
