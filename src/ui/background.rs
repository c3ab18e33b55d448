//! Ambient particle field drawn behind the content
//!
//! Particles drift at constant velocity and bounce off the field edges.
//! Pairs closer than [`LINK_DISTANCE`] are joined by a line that fades
//! with distance. Coordinates are virtual pixels: each terminal cell
//! counts as [`CELL_WIDTH`]×[`CELL_HEIGHT`].

use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};

use crate::ui::theme::{blend, Theme};

/// Virtual pixels per terminal column
pub const CELL_WIDTH: f64 = 8.0;
/// Virtual pixels per terminal row
pub const CELL_HEIGHT: f64 = 16.0;
/// Particles farther apart than this are not linked
pub const LINK_DISTANCE: f64 = 150.0;
/// Link opacity at zero distance
pub const LINK_OPACITY: f64 = 0.15;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Radius in virtual pixels, [0.5, 2.5)
    pub size: f64,
    /// [0.2, 0.7)
    pub opacity: f64,
}

impl Particle {
    fn random(rng: &mut fastrand::Rng, width: f64, height: f64) -> Self {
        Self {
            x: rng.f64() * width,
            y: rng.f64() * height,
            vx: (rng.f64() - 0.5) * 0.5,
            vy: (rng.f64() - 0.5) * 0.5,
            size: rng.f64() * 2.0 + 0.5,
            opacity: rng.f64() * 0.5 + 0.2,
        }
    }

    /// Move one frame, reversing velocity when outside the field
    fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// Line between two nearby particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

/// Opacity of a link between particles `distance` apart, `None` past the cutoff
pub fn link_opacity(distance: f64) -> Option<f64> {
    (distance < LINK_DISTANCE).then(|| LINK_OPACITY * (1.0 - distance / LINK_DISTANCE))
}

#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: fastrand::Rng,
    count: usize,
}

impl ParticleField {
    pub fn new(count: usize) -> Self {
        Self::with_seed(count, fastrand::u64(..))
    }

    /// Deterministic field for tests
    pub fn with_seed(count: usize, seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng: fastrand::Rng::with_seed(seed),
            count,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Resize to a pixel extent. Particles are spawned on the first
    /// non-empty size and pulled inside when the field shrinks.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        if self.particles.is_empty() && self.width > 0.0 && self.height > 0.0 {
            let (w, h) = (self.width, self.height);
            let rng = &mut self.rng;
            self.particles = (0..self.count).map(|_| Particle::random(rng, w, h)).collect();
            tracing::debug!(count = self.count, width = w, height = h, "particles spawned");
            return;
        }

        for p in &mut self.particles {
            p.x = p.x.clamp(0.0, self.width);
            p.y = p.y.clamp(0.0, self.height);
        }
    }

    /// Resize to cover a terminal area
    pub fn resize_to_area(&mut self, area: Rect) {
        self.resize(
            f64::from(area.width) * CELL_WIDTH,
            f64::from(area.height) * CELL_HEIGHT,
        );
    }

    /// Advance one frame
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.step(w, h);
        }
    }

    /// Links between every pair of nearby particles, each pair once
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if let Some(opacity) = link_opacity(distance) {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        opacity,
                    });
                }
            }
        }
        links
    }

    /// Draw into `area`; y is flipped so the field reads top-down like the screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 || self.particles.is_empty() {
            return;
        }

        let height = self.height;
        let links = self.links();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(Theme::BACKGROUND)
            .x_bounds([0.0, self.width])
            .y_bounds([0.0, self.height])
            .paint(move |ctx| {
                for link in &links {
                    ctx.draw(&CanvasLine {
                        x1: link.from.0,
                        y1: height - link.from.1,
                        x2: link.to.0,
                        y2: height - link.to.1,
                        color: blend(Theme::SECONDARY, Theme::BACKGROUND, link.opacity),
                    });
                }
                ctx.layer();
                for p in &self.particles {
                    ctx.draw(&Points {
                        coords: &[(p.x, height - p.y)],
                        color: blend(Theme::PRIMARY, Theme::BACKGROUND, p.opacity),
                    });
                }
            });
        frame.render_widget(canvas, area);
    }
}
