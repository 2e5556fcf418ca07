//! Folio GUI Application
//!
//! A single-page developer portfolio rendered with egui. The page features:
//! - Five stacked sections with a sticky navigation header
//! - An animated background that re-themes itself to the section in view
//! - Floating particles and a bokeh layer behind the projects gallery
//! - A validated contact form with simulated delivery
//! - Light and dark themes with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Visual styling and color mapping
//! - `io/` - Off-thread contact delivery
//! - `ui/` - Header, page, sections and panel orchestration
//! - `rendering/` - Low-level painting of the animated background
//! - `state/` - State for theme, scrolling, contact form and gallery

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::time::Instant;

use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use eframe::egui;
use folio::theme::{DARK, LIGHT};
use folio::BackgroundConfig;
use tracing_subscriber::EnvFilter;

mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use io::ContactSender;
use ui::panel_manager::{PanelInteraction, PanelManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl ThemeArg {
    fn theme_name(self) -> &'static str {
        match self {
            ThemeArg::Light => LIGHT,
            ThemeArg::Dark => DARK,
        }
    }
}

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio-gui")]
#[command(about = "Single-page portfolio with a section-aware animated background")]
struct Args {
    /// Start with this theme instead of the saved one
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Seed for reproducible particle layouts
    #[arg(long)]
    seed: Option<u64>,

    /// Quiet period before the background follows a new section
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Number of background particles
    #[arg(long)]
    particles: Option<usize>,

    /// Disable background particles
    #[arg(long)]
    no_particles: bool,
}

impl Args {
    /// Applies command-line overrides on top of the saved configuration.
    fn apply_to(&self, mut config: BackgroundConfig) -> BackgroundConfig {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.debounce_ms = debounce_ms;
        }
        if let Some(count) = self.particles {
            config.particle_count = count;
        }
        if self.no_particles {
            config.particles_enabled = false;
        }
        config.sanitized()
    }
}

/// Main application entry point that initializes logging and launches the window.
fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    tracing::info!(?args, "starting folio");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([420.0, 480.0])
            .with_title("Folio"),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| Ok(Box::new(FolioApp::new(cc, &args)))),
    )
    .map_err(|err| anyhow!("failed to run the window: {err}"))
}

/// The portfolio application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` drives the background and the contact workflow
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles panel layout and rendering
struct FolioApp {
    /// Centralized application state
    state: AppState,
    /// Background contact delivery
    sender: ContactSender,
    /// Settings as loaded from storage, without command-line overrides
    stored_theme: String,
    stored_config: BackgroundConfig,
}

impl FolioApp {
    fn new(cc: &eframe::CreationContext, args: &Args) -> Self {
        Self::from_storage(cc.storage, args)
    }

    /// Creates the app with settings from storage, overridden by the command line.
    ///
    /// Overrides only apply to this run; `save` writes back the stored values.
    fn from_storage(storage: Option<&dyn eframe::Storage>, args: &Args) -> Self {
        let stored_theme = ThemeCoordinator::load_theme_from_storage(storage);
        let stored_config = SettingsCoordinator::load_background_config(storage);

        let theme_name = match args.theme {
            Some(theme) => theme.theme_name().to_string(),
            None => stored_theme.clone(),
        };
        let config = args.apply_to(stored_config.clone());
        tracing::debug!(?config, theme = %theme_name, "loaded settings");

        Self {
            state: AppState::with_settings(theme_name, config),
            sender: ContactSender::new(),
            stored_theme,
            stored_config,
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context, frame: &mut eframe::Frame) {
        match interaction {
            PanelInteraction::NavigateTo(section) => {
                ApplicationCoordinator::navigate_to(&mut self.state, section);
            }
            PanelInteraction::ToggleTheme => {
                ThemeCoordinator::toggle_theme(&mut self.state);
                // An explicit toggle is a preference worth keeping
                self.stored_theme = self.state.theme.current_theme_name().to_string();
                if let Some(storage) = frame.storage_mut() {
                    ThemeCoordinator::save_theme_to_storage(storage, &self.stored_theme);
                }
            }
            PanelInteraction::SubmitContact => {
                ApplicationCoordinator::submit_contact(&mut self.state, &mut self.sender, ctx);
            }
        }
    }
}

impl eframe::App for FolioApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, &self.stored_theme);
        SettingsCoordinator::save_background_config(storage, &self.stored_config);
    }

    /// Main update loop:
    /// 1. Check for contact delivery
    /// 2. Apply theme
    /// 3. Render background and panels via PanelManager
    /// 4. Feed the frame's scroll state to the background controller
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let now = Instant::now();

        ApplicationCoordinator::check_contact_completion(&mut self.state, &mut self.sender, now);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        let interaction = PanelManager::render_all_panels(ctx, &mut self.state, now);

        ApplicationCoordinator::after_page_rendered(&mut self.state, ctx, now);

        if let Some(interaction) = interaction {
            self.handle_panel_interaction(interaction, ctx, frame);
        }
    }
}
