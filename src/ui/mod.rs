//! UI panel rendering subsystem
//!
//! This module contains all UI rendering logic for the folio page:
//! - Header panel (nav links, theme toggle)
//! - Page panel (scroll area, section anchors, nav jumps)
//! - Sections (hero, about, skills, projects, contact, footer)
//! - Contact form widget
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod page_panel;
pub mod sections;
pub mod contact_form;
pub mod panel_manager;
