pub mod section;
pub mod palette;
pub mod registry;
pub mod sampler;
pub mod easing;
pub mod transition;
pub mod motion;
pub mod particles;
pub mod controller;
pub mod config;
pub mod theme;
pub mod contact;
pub mod content;

// Export section model
pub use section::Section;
pub use registry::{SectionRegistry, ThemeConfig};
pub use palette::{GradientDirection, GradientToken, Hue};

// Export active-section detection
pub use sampler::{compute_active_section, AnchorMap, AnchorRect, AnchorSource, ViewportSample};
pub use transition::{DebounceLatch, FadingLayer, SectionChange, TransitionState};

// Export background controller
pub use controller::{BackgroundController, BackgroundFrame, Lifecycle, PageHost, ShapeFrame, ThemedLayer};
pub use motion::{GridTilt, Placement, Pose};
pub use particles::{ExecutionContext, LoopStyle, Particle, ParticleField, ParticleProfile, ParticleState};
pub use config::BackgroundConfig;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};

// Export contact form
pub use contact::{ContactErrors, ContactFieldError, ContactForm, ContactSubmission};
