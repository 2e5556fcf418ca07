//! The page sections, top to bottom, and the footer.

use std::time::Instant;

use eframe::egui;
use egui::{RichText, Sense};
use folio::content::{self, MilestoneKind, Project};
use folio::theme::with_alpha;
use folio::{Section, ThemeColors};
use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::rendering::background_renderer;
use crate::ui::contact_form;
use crate::ui::page_panel::PageInteraction;

/// Widest the content column grows.
const CONTENT_WIDTH: f32 = 1080.0;
/// Vertical padding of every section but the hero.
const SECTION_PADDING: f32 = 80.0;

/// Renders one section. `viewport_height` sizes the hero to fill the screen.
pub fn render_section(
    ui: &mut egui::Ui,
    section: Section,
    state: &mut AppState,
    colors: &ThemeColors,
    viewport_height: f32,
    now: Instant,
) -> Option<PageInteraction> {
    match section {
        Section::Hero => render_hero(ui, colors, viewport_height),
        Section::About => padded(ui, |ui| render_about(ui, colors)),
        Section::Skills => padded(ui, |ui| render_skills(ui, colors)),
        Section::Projects => {
            let top = ui.painter().add(egui::Shape::Noop);
            let response = ui.scope(|ui| padded(ui, |ui| render_projects(ui, state, colors)));
            let tint = color_mapping::section_accent(Section::Projects);
            let sizes: Vec<f32> = state.gallery.bokeh_sizes().collect();
            let states = state.gallery.bokeh_states(now);
            let shapes = background_renderer::bokeh_shapes(response.response.rect, &states, &sizes, tint);
            ui.painter().set(top, egui::Shape::Vec(shapes));
            response.inner
        }
        Section::Contact => padded(ui, |ui| render_contact(ui, state, colors, now)),
    }
}

/// Centers a content column and pads it vertically.
fn padded<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    ui.add_space(SECTION_PADDING);
    let width = ui.available_width().min(CONTENT_WIDTH);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    let inner = ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    });
    ui.add_space(SECTION_PADDING);
    inner.inner
}

fn card(colors: &ThemeColors) -> egui::Frame {
    egui::Frame::default()
        .fill(with_alpha(colors.card, 190))
        .stroke(egui::Stroke::new(1.0, colors.border))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(16))
}

fn heading(ui: &mut egui::Ui, title: &str, subtitle: &str, colors: &ThemeColors) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).size(32.0).strong());
        ui.label(RichText::new(subtitle).color(colors.muted_foreground));
    });
    ui.add_space(32.0);
}

fn render_hero(ui: &mut egui::Ui, colors: &ThemeColors, viewport_height: f32) -> Option<PageInteraction> {
    let mut interaction = None;
    ui.vertical_centered(|ui| {
        ui.set_min_height(viewport_height.max(480.0));
        ui.add_space((viewport_height * 0.28).max(96.0));

        ui.label(RichText::new(content::AVAILABILITY).color(colors.success));
        ui.add_space(12.0);
        ui.label(RichText::new(format!("Hi, I'm {}", content::OWNER_NAME)).size(48.0).strong());
        ui.add_space(8.0);
        ui.label(RichText::new(content::HEADLINE).size(22.0).color(colors.primary));
        ui.add_space(16.0);
        ui.set_max_width(640.0);
        ui.label(RichText::new(content::INTRO).color(colors.muted_foreground));
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            let projects = egui::Button::new(RichText::new("View projects").color(colors.primary_foreground)).fill(colors.primary);
            if ui.add(projects).clicked() {
                interaction = Some(PageInteraction::NavigateTo(Section::Projects));
            }
            if ui.button("Contact me").clicked() {
                interaction = Some(PageInteraction::NavigateTo(Section::Contact));
            }
        });
        ui.add_space(16.0);
        ui.horizontal(|ui| {
            for link in content::SOCIAL_LINKS {
                ui.hyperlink_to(link.name, link.url);
            }
        });
    });
    interaction
}

fn render_about(ui: &mut egui::Ui, colors: &ThemeColors) -> Option<PageInteraction> {
    heading(ui, "About me", "A little about who I am and how I got here", colors);

    ui.columns(2, |columns| {
        card(colors).show(&mut columns[0], |ui| {
            ui.label(RichText::new("Journey").size(20.0).strong());
            ui.add_space(8.0);
            for milestone in content::TIMELINE {
                let icon = match milestone.kind {
                    MilestoneKind::Work => "💼",
                    MilestoneKind::Education => "🎓",
                };
                ui.horizontal(|ui| {
                    ui.label(icon);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(milestone.title).strong());
                        ui.label(milestone.description);
                        ui.label(RichText::new(milestone.period).small().color(colors.muted_foreground));
                    });
                });
                ui.add_space(6.0);
            }
        });

        card(colors).show(&mut columns[1], |ui| {
            ui.label(RichText::new("Strengths").size(20.0).strong());
            ui.add_space(8.0);
            for strength in content::STRENGTHS {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("✔").color(colors.success));
                    ui.label(*strength);
                });
            }
        });
    });
    None
}

fn render_skills(ui: &mut egui::Ui, colors: &ThemeColors) -> Option<PageInteraction> {
    heading(ui, "Skills", "Technologies I work with every day", colors);

    let categories = content::SKILL_CATEGORIES;
    ui.columns(categories.len(), |columns| {
        for (ui, category) in columns.iter_mut().zip(categories) {
            card(colors).show(ui, |ui| {
                let accent = color_mapping::accent_color(category.accent);
                ui.label(RichText::new(category.name).size(20.0).strong().color(accent));
                ui.label(RichText::new(category.description).small().color(colors.muted_foreground));
                ui.add_space(10.0);
                for skill in category.skills {
                    ui.horizontal(|ui| {
                        ui.label(skill.name);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(skill.level.label()).small().color(colors.muted_foreground));
                        });
                    });
                    ui.add(
                        egui::ProgressBar::new(skill.level.fraction())
                            .desired_height(4.0)
                            .fill(color_mapping::skill_level_color(skill.level, colors)),
                    );
                    ui.add_space(4.0);
                }
            });
        }
    });
    None
}

fn render_projects(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors) -> Option<PageInteraction> {
    heading(ui, "Projects", "Some of the things I've built", colors);

    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            for filter in content::ProjectFilter::ALL {
                if ui.selectable_label(state.gallery.filter() == filter, filter.label()).clicked() {
                    state.gallery.set_filter(filter);
                }
            }
        });
    });
    ui.add_space(16.0);

    let projects: Vec<&Project> = state.gallery.filter().apply(content::PROJECTS).collect();
    let per_row = if ui.available_width() > 900.0 {
        3
    } else if ui.available_width() > 560.0 {
        2
    } else {
        1
    };
    for row in projects.chunks(per_row) {
        ui.columns(per_row, |columns| {
            for (ui, project) in columns.iter_mut().zip(row) {
                render_project_card(ui, project, colors);
            }
        });
        ui.add_space(12.0);
    }
    None
}

fn render_project_card(ui: &mut egui::Ui, project: &Project, colors: &ThemeColors) {
    card(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(project.title).size(18.0).strong());
            if project.featured {
                ui.label(RichText::new("★ Featured").small().color(colors.primary));
            }
        });
        ui.add_space(4.0);
        ui.label(RichText::new(project.description).color(colors.muted_foreground));
        ui.add_space(8.0);

        let (shown, hidden) = project.tag_summary();
        ui.horizontal_wrapped(|ui| {
            for tag in shown {
                tag_chip(ui, tag, colors);
            }
            if hidden > 0 {
                tag_chip(ui, &format!("+{hidden}"), colors);
            }
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if let Some(demo) = project.demo {
                ui.hyperlink_to("Live demo", demo);
            }
            if let Some(source) = project.source {
                ui.hyperlink_to("Source", source);
            }
        });
    });
}

fn tag_chip(ui: &mut egui::Ui, text: &str, colors: &ThemeColors) {
    egui::Frame::default()
        .fill(colors.muted)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

fn render_contact(ui: &mut egui::Ui, state: &mut AppState, colors: &ThemeColors, now: Instant) -> Option<PageInteraction> {
    heading(ui, "Contact", "Have a project in mind? Let's talk.", colors);

    let mut interaction = None;
    ui.columns(2, |columns| {
        for info in content::CONTACT_CARDS {
            card(colors).show(&mut columns[0], |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(info.title).strong());
                match info.link {
                    Some(link) => {
                        ui.hyperlink_to(info.value, link);
                    }
                    None => {
                        ui.label(info.value);
                    }
                }
            });
            columns[0].add_space(8.0);
        }

        card(colors).show(&mut columns[1], |ui| {
            if contact_form::render_contact_form(ui, &mut state.contact, colors, now) {
                interaction = Some(PageInteraction::SubmitContact);
            }
        });
    });
    interaction
}

/// Renders the footer below the last section.
pub fn render_footer(ui: &mut egui::Ui, colors: &ThemeColors) -> Option<PageInteraction> {
    let mut interaction = None;
    ui.separator();
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(content::OWNER_NAME).strong());
        ui.horizontal(|ui| {
            for section in Section::ALL {
                if ui.link(section.nav_label()).clicked() {
                    interaction = Some(PageInteraction::NavigateTo(section));
                }
            }
        });
        ui.horizontal(|ui| {
            for link in content::SOCIAL_LINKS {
                ui.hyperlink_to(link.name, link.url);
            }
            ui.hyperlink_to("Email", format!("mailto:{}", content::CONTACT_EMAIL));
        });
        ui.label(
            RichText::new(format!("© {}. All rights reserved.", content::OWNER_NAME))
                .small()
                .color(colors.muted_foreground),
        );
        if ui
            .add(egui::Label::new(RichText::new("Back to top ↑").color(colors.primary)).sense(Sense::click()))
            .clicked()
        {
            interaction = Some(PageInteraction::NavigateTo(Section::Hero));
        }
    });
    ui.add_space(24.0);
    interaction
}
