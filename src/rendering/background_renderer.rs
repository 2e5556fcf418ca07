//! Painting of the animated page background.
//!
//! egui has no blur filter, so the blurred gradient blobs of the design are
//! drawn as radial meshes that fade to transparent at the rim. Everything is
//! painted on the background layer beneath all panels, in this order:
//! page fill, themed layers (outgoing first), grid, particles, overlay.

use eframe::egui;
use egui::epaint::Mesh;
use egui::{Color32, Painter, Pos2, Rect, Stroke};
use folio::palette::with_opacity;
use folio::{BackgroundFrame, GradientToken, GridTilt, ParticleState, ShapeFrame, ThemeColors};

/// Segments of a blob's rim.
const BLOB_SEGMENTS: usize = 48;
/// Radius of the solid core of a blob, as a fraction of its radius.
const CORE: f32 = 0.35;
/// Grid cell size in points.
const GRID_STEP: f32 = 48.0;
/// Opacity of the page fill laid over the shapes to keep text readable.
const OVERLAY_OPACITY: f32 = 0.6;
/// Diameter of background particles in points, before scaling.
const PARTICLE_SIZE: f32 = 4.0;

/// Paints the whole background. With no frame only the plain fill is drawn.
pub fn paint_background(ctx: &egui::Context, frame: Option<&BackgroundFrame>, colors: &ThemeColors) {
    let rect = ctx.content_rect();
    let painter = ctx.layer_painter(egui::LayerId::background());
    painter.rect_filled(rect, 0.0, colors.background);

    let Some(frame) = frame else {
        return;
    };

    for layer in &frame.layers {
        if layer.opacity <= 0.0 {
            continue;
        }
        paint_shape(&painter, rect, &layer.main_blob, layer.opacity);
        for shape in &layer.shapes {
            paint_shape(&painter, rect, shape, layer.opacity);
        }
    }

    paint_grid(&painter, rect, frame.grid, colors.foreground);
    paint_particles(&painter, rect, &frame.particles, Color32::WHITE);
    painter.rect_filled(rect, 0.0, with_opacity(colors.background, OVERLAY_OPACITY));
}

/// Bokeh discs behind the projects gallery, laid out over `rect`.
///
/// Returned as shapes so the caller can slot them in beneath content it has
/// already drawn.
pub fn bokeh_shapes(rect: Rect, states: &[ParticleState], sizes: &[f32], tint: Color32) -> Vec<egui::Shape> {
    states
        .iter()
        .zip(sizes)
        .filter_map(|(state, size)| {
            let center = percent_point(rect, state.x, state.y);
            let radius = size * state.scale * 0.5;
            soft_disc(center, radius, |_| with_opacity(tint, state.opacity * 0.25))
        })
        .map(egui::Shape::mesh)
        .collect()
}

fn paint_shape(painter: &Painter, rect: Rect, shape: &ShapeFrame, layer_opacity: f32) {
    let placement = shape.placement;
    let center = Pos2::new(
        rect.left() + placement.center.0 * rect.width() + shape.pose.dx,
        rect.top() + placement.center.1 * rect.height() + shape.pose.dy,
    );
    let radius = placement.size * rect.width() * 0.5 * shape.pose.scale;
    let opacity = placement.opacity * layer_opacity;
    let axis = rotate(shape.gradient.direction.axis(), shape.pose.rotation);
    let gradient = shape.gradient;

    if let Some(mesh) = soft_disc(center, radius, |dir| gradient_color(&gradient, axis, dir, opacity)) {
        painter.add(egui::Shape::mesh(mesh));
    }
}

fn gradient_color(gradient: &GradientToken, axis: egui::Vec2, dir: egui::Vec2, opacity: f32) -> Color32 {
    // dir is the unit offset from the centre; project it onto the gradient axis
    let t = 0.5 + 0.5 * dir.dot(axis);
    gradient.color_at(t, opacity)
}

/// Triangle fan with a solid core and a rim that fades to transparent.
/// `color` receives the unit direction from the centre.
fn soft_disc(center: Pos2, radius: f32, color: impl Fn(egui::Vec2) -> Color32) -> Option<Mesh> {
    if radius <= 0.5 {
        return None;
    }
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color(egui::Vec2::ZERO));

    for i in 0..BLOB_SEGMENTS {
        let angle = i as f32 / BLOB_SEGMENTS as f32 * std::f32::consts::TAU;
        let dir = egui::vec2(angle.cos(), angle.sin());
        let c = color(dir);
        mesh.colored_vertex(center + dir * radius * CORE, c);
        mesh.colored_vertex(center + dir * radius, Color32::TRANSPARENT);
    }

    let n = BLOB_SEGMENTS as u32;
    for i in 0..n {
        let j = (i + 1) % n;
        let (core_i, rim_i) = (1 + 2 * i, 2 + 2 * i);
        let (core_j, rim_j) = (1 + 2 * j, 2 + 2 * j);
        mesh.add_triangle(0, core_i, core_j);
        mesh.add_triangle(core_i, rim_i, rim_j);
        mesh.add_triangle(core_i, rim_j, core_j);
    }
    Some(mesh)
}

fn paint_grid(painter: &Painter, rect: Rect, tilt: GridTilt, color: Color32) {
    let stroke = Stroke::new(1.0, with_opacity(color, 0.04));
    let center = rect.center();
    // Fake perspective: shear each axis by the tilt around the other one
    let shear_x = tilt.rotate_y.to_radians().sin();
    let shear_y = tilt.rotate_x.to_radians().sin();
    let project = |p: Pos2| Pos2::new(p.x + (p.y - center.y) * shear_x, p.y + (p.x - center.x) * shear_y);

    let margin = rect.expand(rect.width().max(rect.height()) * 0.1);
    let mut x = margin.left();
    while x <= margin.right() {
        painter.line_segment([project(Pos2::new(x, margin.top())), project(Pos2::new(x, margin.bottom()))], stroke);
        x += GRID_STEP;
    }
    let mut y = margin.top();
    while y <= margin.bottom() {
        painter.line_segment([project(Pos2::new(margin.left(), y)), project(Pos2::new(margin.right(), y))], stroke);
        y += GRID_STEP;
    }
}

fn paint_particles(painter: &Painter, rect: Rect, particles: &[ParticleState], color: Color32) {
    for p in particles {
        let center = percent_point(rect, p.x, p.y);
        painter.circle_filled(center, PARTICLE_SIZE * 0.5 * p.scale, with_opacity(color, p.opacity));
    }
}

fn percent_point(rect: Rect, x: f32, y: f32) -> Pos2 {
    Pos2::new(rect.left() + x / 100.0 * rect.width(), rect.top() + y / 100.0 * rect.height())
}

fn rotate(v: egui::Vec2, degrees: f32) -> egui::Vec2 {
    let (s, c) = degrees.to_radians().sin_cos();
    egui::vec2(v.x * c - v.y * s, v.x * s + v.y * c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::{GradientDirection, Hue};

    #[test]
    fn test_percent_point() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(200.0, 100.0));
        assert_eq!(percent_point(rect, 50.0, 50.0), Pos2::new(110.0, 70.0));
    }

    #[test]
    fn test_gradient_endpoints_follow_axis() {
        let token = GradientToken::new(Hue::Purple, Hue::Blue, GradientDirection::ToBottomRight, 1.0);
        let axis = token.direction.axis();
        assert_eq!(gradient_color(&token, axis, axis, 1.0), token.color_at(1.0, 1.0));
        assert_eq!(gradient_color(&token, axis, -axis, 1.0), token.color_at(0.0, 1.0));
    }

    #[test]
    fn test_soft_disc_geometry() {
        let mesh = soft_disc(Pos2::ZERO, 10.0, |_| Color32::WHITE).unwrap();
        assert_eq!(mesh.vertices.len(), 1 + 2 * BLOB_SEGMENTS);
        assert_eq!(mesh.indices.len(), 9 * BLOB_SEGMENTS);
        assert!(soft_disc(Pos2::ZERO, 0.1, |_| Color32::WHITE).is_none());
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate(egui::vec2(1.0, 0.0), 90.0);
        assert!(v.x.abs() < 1e-6 && (v.y - 1.0).abs() < 1e-6);
    }
}
