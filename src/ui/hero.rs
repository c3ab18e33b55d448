//! Home page 3D scene
//!
//! A rotating torus-knot wireframe inside a slowly turning cloud of points,
//! projected in software and drawn on a braille canvas. The knot follows
//! the pointer and its glow pulses over time. Areas too small to read
//! get a static illustration instead.

use std::f32::consts::TAU;
use std::time::Instant;

use glam::{Mat4, Vec3, Vec4};
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::Paragraph;

use crate::app::Pointer;
use crate::ui::background::{CELL_HEIGHT, CELL_WIDTH};
use crate::ui::theme::{blend, Theme};

/// Smallest area the scene is drawn in
pub const MIN_WIDTH: u16 = 20;
pub const MIN_HEIGHT: u16 = 8;

/// Longest frame step, seconds
pub const MAX_DT: f32 = 0.016;
/// Global animation speed
pub const SPEED: f32 = 1.2;

const FOV_DEGREES: f32 = 45.0;
const CAMERA_Z: f32 = 6.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;

const KNOT_RADIUS: f32 = 1.2;
const KNOT_TUBE: f32 = 0.35;
const KNOT_P: f32 = 2.0;
const KNOT_Q: f32 = 3.0;
const TUBULAR_SEGMENTS: usize = 96;
const RADIAL_SEGMENTS: usize = 8;

const CLOUD_POINTS: usize = 1000;
/// Cloud box extent (x, y, z), centered on the origin
const CLOUD_EXTENT: Vec3 = Vec3::new(20.0, 10.0, 15.0);

/// Point on the (p, q) torus-knot centerline
fn knot_curve(u: f32) -> Vec3 {
    let qu_over_p = KNOT_Q / KNOT_P * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        KNOT_RADIUS * (2.0 + cs) * 0.5 * u.cos(),
        KNOT_RADIUS * (2.0 + cs) * 0.5 * u.sin(),
        KNOT_RADIUS * qu_over_p.sin() * 0.5,
    )
}

/// Tube vertices, `TUBULAR_SEGMENTS` rings of `RADIAL_SEGMENTS` each
fn knot_vertices() -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(TUBULAR_SEGMENTS * RADIAL_SEGMENTS);
    for i in 0..TUBULAR_SEGMENTS {
        let u = i as f32 / TUBULAR_SEGMENTS as f32 * KNOT_P * TAU;
        let p1 = knot_curve(u);
        let p2 = knot_curve(u + 0.01);

        // Frame around the curve
        let t = p2 - p1;
        let b = t.cross(p2 + p1).normalize_or_zero();
        let n = b.cross(t).normalize_or_zero();

        for j in 0..RADIAL_SEGMENTS {
            let v = j as f32 / RADIAL_SEGMENTS as f32 * TAU;
            let cx = -KNOT_TUBE * v.cos();
            let cy = KNOT_TUBE * v.sin();
            vertices.push(p1 + n * cx + b * cy);
        }
    }
    vertices
}

fn cloud_points(rng: &mut fastrand::Rng) -> Vec<Vec3> {
    (0..CLOUD_POINTS)
        .map(|_| {
            Vec3::new(rng.f32() - 0.5, rng.f32() - 0.5, rng.f32() - 0.5) * CLOUD_EXTENT
        })
        .collect()
}

#[derive(Debug)]
pub struct HeroScene {
    /// Knot rotation about x and y, radians
    pub rotation_x: f32,
    pub rotation_y: f32,
    /// Cloud rotation about y, radians
    pub cloud_rotation: f32,
    /// Glow strength of the knot
    pub emissive: f32,
    /// Viewport width / height in pixels
    aspect: f32,
    started: Instant,
    last: Option<Instant>,
    knot: Vec<Vec3>,
    cloud: Vec<Vec3>,
}

impl Default for HeroScene {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroScene {
    pub fn new() -> Self {
        Self::with_seed(fastrand::u64(..))
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            cloud_rotation: 0.0,
            emissive: 0.3,
            aspect: 1.0,
            started: Instant::now(),
            last: None,
            knot: knot_vertices(),
            cloud: cloud_points(&mut rng),
        }
    }

    /// Whether `area` is large enough for the 3D scene
    pub fn supports(area: Rect) -> bool {
        area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Match the projection to the drawing area
    pub fn resize_to_area(&mut self, area: Rect) {
        if area.width > 0 && area.height > 0 {
            self.aspect = (f32::from(area.width) * CELL_WIDTH as f32)
                / (f32::from(area.height) * CELL_HEIGHT as f32);
        }
    }

    /// Advance to `now`; the step is clamped to [`MAX_DT`]
    pub fn update(&mut self, now: Instant, pointer: Pointer) {
        let dt = self
            .last
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        let elapsed_ms = now.saturating_duration_since(self.started).as_secs_f32() * 1000.0;
        self.step(dt, elapsed_ms, pointer);
    }

    /// Advance by `dt` seconds at `elapsed_ms` since start
    pub fn step(&mut self, dt: f32, elapsed_ms: f32, pointer: Pointer) {
        let dt = dt.clamp(0.0, MAX_DT);
        self.rotation_x += dt * 0.4 * SPEED + pointer.x * 0.3;
        self.rotation_y += dt * 0.6 * SPEED + pointer.y * 0.3;
        self.cloud_rotation += dt * 0.05 * SPEED;
        self.emissive = pulse(elapsed_ms);
    }

    fn view_projection(&self) -> Mat4 {
        let projection = Mat4::perspective_rh_gl(FOV_DEGREES.to_radians(), self.aspect, NEAR, FAR);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, CAMERA_Z), Vec3::ZERO, Vec3::Y);
        projection * view
    }

    /// Project through `mvp` to normalized device coordinates; `None` behind the camera
    fn project(mvp: &Mat4, p: Vec3) -> Option<(f64, f64)> {
        let clip: Vec4 = *mvp * p.extend(1.0);
        if clip.w <= NEAR {
            return None;
        }
        Some((f64::from(clip.x / clip.w), f64::from(clip.y / clip.w)))
    }

    /// Knot edges in NDC, ring edges then edges along the tube
    pub fn knot_segments(&self) -> Vec<((f64, f64), (f64, f64))> {
        let model = Mat4::from_rotation_x(self.rotation_x) * Mat4::from_rotation_y(self.rotation_y);
        let mvp = self.view_projection() * model;
        let projected: Vec<Option<(f64, f64)>> =
            self.knot.iter().map(|&v| Self::project(&mvp, v)).collect();

        let at = |i: usize, j: usize| {
            projected[(i % TUBULAR_SEGMENTS) * RADIAL_SEGMENTS + (j % RADIAL_SEGMENTS)]
        };

        let mut segments = Vec::with_capacity(TUBULAR_SEGMENTS * RADIAL_SEGMENTS * 2);
        for i in 0..TUBULAR_SEGMENTS {
            for j in 0..RADIAL_SEGMENTS {
                if let (Some(a), Some(b)) = (at(i, j), at(i, j + 1)) {
                    segments.push((a, b));
                }
                if let (Some(a), Some(b)) = (at(i, j), at(i + 1, j)) {
                    segments.push((a, b));
                }
            }
        }
        segments
    }

    /// Cloud points in NDC
    pub fn cloud_coords(&self) -> Vec<(f64, f64)> {
        let mvp = self.view_projection() * Mat4::from_rotation_y(self.cloud_rotation);
        self.cloud
            .iter()
            .filter_map(|&p| Self::project(&mvp, p))
            .collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let segments = self.knot_segments();
        let cloud = self.cloud_coords();
        let knot_color = blend(Theme::SECONDARY, Theme::MESH, f64::from(self.emissive));
        let cloud_color = blend(Theme::PRIMARY, Theme::BACKGROUND, 0.8);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(move |ctx| {
                ctx.draw(&Points {
                    coords: &cloud,
                    color: cloud_color,
                });
                ctx.layer();
                for &((x1, y1), (x2, y2)) in &segments {
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: knot_color,
                    });
                }
            });
        frame.render_widget(canvas, area);
    }
}

/// Emissive intensity at `elapsed_ms`, oscillating in [0.1, 0.5]
pub fn pulse(elapsed_ms: f32) -> f32 {
    0.3 + (elapsed_ms * 0.001).sin() * 0.2
}

const FALLBACK_ART: [&str; 7] = [
    "   .-------------------.   ",
    "  /  o   o   o   o   o  \\ ",
    " |   ===================  |",
    " |   |   R E E L   |   |  |",
    " |   ===================  |",
    "  \\  o   o   o   o   o  / ",
    "   '-------------------'   ",
];

/// Static illustration for areas the scene does not fit
pub fn render_fallback(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = FALLBACK_ART
        .iter()
        .map(|l| Line::from(Span::styled(*l, Theme::title())))
        .collect();
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
