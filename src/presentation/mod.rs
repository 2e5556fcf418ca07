//! Presentation layer for visual styling and color mapping.
//!
//! This module contains presentation logic separated from page content:
//! - Theme palette lookup
//! - Accent and skill-bar colors

pub mod color_mapping;
