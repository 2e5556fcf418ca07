//! Timing curves shared by the background animations.
//!
//! These are pure functions of normalised or elapsed time, so every animated
//! value can be computed from a frame timestamp without keeping per-frame
//! integration state.

/// A CSS-style cubic Bézier timing curve through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

/// `ease-in-out`, used by every looping keyframe animation.
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

/// Material "standard" curve used for the section cross-fade.
pub const FADE: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f32, a2: f32, t: f32) -> f32 {
        // Bernstein form with P0 = 0 and P3 = 1
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f32, a2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Eased progress for linear progress `x` in 0..=1.
    pub fn ease(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton-Raphson on x(t) = x, bisection if the slope vanishes
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-5 {
                return Self::sample(self.y1, self.y2, t);
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let v = Self::sample(self.x1, self.x2, t);
            if (v - x).abs() < 1e-5 {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }
}

/// Damped spring driving a value from 0 toward 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

/// Spring used for the background blobs settling on a new theme.
pub const BLOB_SPRING: Spring = Spring {
    stiffness: 100.0,
    damping: 30.0,
    mass: 1.0,
};

impl Spring {
    /// Position of a unit step response, starting at rest at 0, after `t` seconds.
    pub fn progress(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        let omega = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping / (2.0 * (self.stiffness * self.mass).sqrt());

        let x = if (zeta - 1.0).abs() < 1e-4 {
            1.0 - (1.0 + omega * t) * (-omega * t).exp()
        } else if zeta > 1.0 {
            let s = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - s);
            let r2 = -omega * (zeta + s);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        } else {
            let wd = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            1.0 - envelope * ((wd * t).cos() + zeta * omega / wd * (wd * t).sin())
        };
        x.clamp(-1.0, 2.0)
    }
}

/// Linear interpolation.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Samples evenly spaced keyframes at loop progress `p` (0..=1), easing each
/// segment with ease-in-out.
pub fn keyframes(values: &[f32], p: f32) -> f32 {
    match values.len() {
        0 => 0.0,
        1 => values[0],
        n => {
            let segments = (n - 1) as f32;
            let scaled = p.clamp(0.0, 1.0) * segments;
            let index = (scaled.floor() as usize).min(n - 2);
            let local = scaled - index as f32;
            lerp(values[index], values[index + 1], EASE_IN_OUT.ease(local))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezier_endpoints_and_monotonic() {
        for curve in [EASE_IN_OUT, FADE] {
            assert_eq!(curve.ease(0.0), 0.0);
            assert_eq!(curve.ease(1.0), 1.0);
            let mut last = 0.0;
            for i in 1..=20 {
                let v = curve.ease(i as f32 / 20.0);
                assert!(v >= last - 1e-4);
                last = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let a = EASE_IN_OUT.ease(0.25);
        let b = EASE_IN_OUT.ease(0.75);
        assert!((a + b - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_spring_settles() {
        assert_eq!(BLOB_SPRING.progress(0.0), 0.0);
        assert!(BLOB_SPRING.progress(0.2) > 0.0);
        assert!((BLOB_SPRING.progress(5.0) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let bouncy = Spring { stiffness: 300.0, damping: 5.0, mass: 1.0 };
        let peak = (1..200).map(|i| bouncy.progress(i as f32 / 100.0)).fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_keyframes_hit_each_value() {
        let values = [0.0, 60.0, -60.0, 0.0];
        assert_eq!(keyframes(&values, 0.0), 0.0);
        assert!((keyframes(&values, 1.0 / 3.0) - 60.0).abs() < 1e-3);
        assert!((keyframes(&values, 2.0 / 3.0) + 60.0).abs() < 1e-3);
        assert_eq!(keyframes(&values, 1.0), 0.0);
    }
}
