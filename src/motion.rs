//! Ambient motion of the decorative background shapes.
//!
//! Blobs loop forever on their own clocks, independent of scrolling. The only
//! scroll-dependent input is which gradient slot of the active [`ThemeConfig`]
//! they are painted with, plus the spring the large blobs use to settle after
//! a section change.

use crate::easing::{self, BLOB_SPRING};
use crate::palette::GradientToken;
use crate::registry::ThemeConfig;

/// Which gradient of a [`ThemeConfig`] a shape is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientSlot {
    Primary,
    Secondary,
    Tertiary,
}

impl GradientSlot {
    pub fn token(self, theme: &ThemeConfig) -> GradientToken {
        match self {
            GradientSlot::Primary => theme.primary,
            GradientSlot::Secondary => theme.secondary,
            GradientSlot::Tertiary => theme.tertiary,
        }
    }
}

/// Offset, scale and rotation of a shape at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Offset from the resting position, in points
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
    /// Degrees
    pub rotation: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
        rotation: 0.0,
    };
}

/// Placement of a shape relative to the viewport, as fractions of its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Centre, 0..1 of viewport width/height
    pub center: (f32, f32),
    /// Diameter as a fraction of viewport width
    pub size: f32,
    /// Resting opacity multiplier
    pub opacity: f32,
}

/// A small blob that drifts on an infinite loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingBlob {
    pub placement: Placement,
    pub slot: GradientSlot,
    /// Seconds per loop
    pub duration: f32,
    /// Seconds before the first loop starts
    pub delay: f32,
    /// Peak vertical travel in points; horizontal travel is half of it
    pub amplitude: f32,
}

const BLOB_SCALE_KEYS: [f32; 4] = [1.0, 1.1, 0.9, 1.0];
const BLOB_ROTATE_KEYS: [f32; 4] = [0.0, 10.0, -10.0, 0.0];

impl MovingBlob {
    /// Pose after `elapsed` seconds since the layer was mounted.
    pub fn pose_at(&self, elapsed: f32) -> Pose {
        let local = elapsed - self.delay;
        if local <= 0.0 || self.duration <= 0.0 {
            return Pose::REST;
        }
        let p = (local / self.duration).fract();
        let a = self.amplitude;
        Pose {
            dx: easing::keyframes(&[0.0, -a / 2.0, a / 2.0, 0.0], p),
            dy: easing::keyframes(&[0.0, a, -a, 0.0], p),
            scale: easing::keyframes(&BLOB_SCALE_KEYS, p),
            rotation: easing::keyframes(&BLOB_ROTATE_KEYS, p),
        }
    }
}

/// The three drifting blobs, each tinted with a different slot of the active theme.
pub const MOVING_BLOBS: [MovingBlob; 3] = [
    MovingBlob {
        placement: Placement { center: (0.175, 0.375), size: 0.15, opacity: 0.4 },
        slot: GradientSlot::Secondary,
        duration: 25.0,
        delay: 0.0,
        amplitude: 60.0,
    },
    MovingBlob {
        placement: Placement { center: (0.75, 0.65), size: 0.20, opacity: 0.4 },
        slot: GradientSlot::Primary,
        duration: 30.0,
        delay: 5.0,
        amplitude: 40.0,
    },
    MovingBlob {
        placement: Placement { center: (0.45, 0.20), size: 0.10, opacity: 0.4 },
        slot: GradientSlot::Tertiary,
        duration: 18.0,
        delay: 2.0,
        amplitude: 30.0,
    },
];

/// A large blob that springs into place whenever the active section changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlingBlob {
    pub placement: Placement,
    pub slot: GradientSlot,
    /// Pose the blob starts from when a section becomes active
    pub from: Pose,
    /// Seconds to wait after the change before springing
    pub delay: f32,
}

impl SettlingBlob {
    /// Pose `since_change` seconds after the section change.
    pub fn pose_at(&self, since_change: f32) -> Pose {
        let k = BLOB_SPRING.progress(since_change - self.delay);
        Pose {
            dx: easing::lerp(self.from.dx, 0.0, k),
            dy: easing::lerp(self.from.dy, 0.0, k),
            scale: easing::lerp(self.from.scale, 1.0, k),
            rotation: easing::lerp(self.from.rotation, 0.0, k),
        }
    }
}

pub const SETTLING_BLOBS: [SettlingBlob; 2] = [
    SettlingBlob {
        placement: Placement { center: (0.65, 0.30), size: 0.40, opacity: 0.3 },
        slot: GradientSlot::Secondary,
        from: Pose { dx: 50.0, dy: 20.0, scale: 0.8, rotation: 0.0 },
        delay: 0.1,
    },
    SettlingBlob {
        placement: Placement { center: (0.375, 0.775), size: 0.35, opacity: 0.3 },
        slot: GradientSlot::Tertiary,
        from: Pose { dx: -30.0, dy: 40.0, scale: 0.7, rotation: 0.0 },
        delay: 0.2,
    },
];

/// Oversized main blob behind everything; it springs from the previous section's
/// rotation to the active section's scale and rotation.
pub fn main_blob_pose(previous: &ThemeConfig, active: &ThemeConfig, since_change: f32) -> Pose {
    let k = BLOB_SPRING.progress(since_change);
    Pose {
        dx: 0.0,
        dy: 0.0,
        scale: easing::lerp(0.9, active.scale, k),
        rotation: easing::lerp(previous.rotation, active.rotation, k),
    }
}

/// Perspective tilt of the background grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTilt {
    /// Degrees around the horizontal axis
    pub rotate_x: f32,
    /// Degrees around the vertical axis
    pub rotate_y: f32,
}

/// Seconds for one sweep of the grid tilt; the sweep then plays in reverse.
pub const GRID_PERIOD: f32 = 20.0;

/// Grid tilt after `elapsed` seconds.
pub fn grid_tilt_at(elapsed: f32) -> GridTilt {
    let cycle = (elapsed.max(0.0) / GRID_PERIOD) % 2.0;
    let p = if cycle < 1.0 { cycle } else { 2.0 - cycle };
    GridTilt {
        rotate_x: easing::keyframes(&[0.0, 5.0, 0.0], p),
        rotate_y: easing::keyframes(&[0.0, -3.0, 0.0], p),
    }
}
