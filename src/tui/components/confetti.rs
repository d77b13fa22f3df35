//! # Confetti
//!
//! A tiny particle system for the like and name bursts. Purely decorative:
//! it owns its own rng and never sees the page state.
//!
//! Coordinates are terminal cells as `f32`. Gravity pulls particles down
//! the screen (positive y) until their time-to-live runs out.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;

const GRAVITY: f32 = 18.0;
const GLYPHS: &[char] = &['*', '+', '•', '✦', '♥', '✿', '·'];
const COLORS: &[Color] = &[
    Color::LightMagenta,
    Color::Magenta,
    Color::LightRed,
    Color::Yellow,
    Color::LightCyan,
    Color::LightGreen,
];

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    ttl: f32,
    glyph: char,
    color: Color,
}

pub struct Confetti {
    particles: Vec<Particle>,
    enabled: bool,
    burst_size: usize,
    rng: StdRng,
}

impl Confetti {
    pub fn new(enabled: bool, burst_size: usize) -> Self {
        Self::with_rng(enabled, burst_size, StdRng::from_os_rng())
    }

    pub fn seeded(enabled: bool, burst_size: usize, seed: u64) -> Self {
        Self::with_rng(enabled, burst_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(enabled: bool, burst_size: usize, rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            enabled,
            burst_size,
            rng,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Launch a burst from `origin`. Does nothing when disabled.
    pub fn burst(&mut self, origin: (f32, f32)) {
        if !self.enabled {
            return;
        }
        for _ in 0..self.burst_size {
            // Upward-biased spray; terminal cells are ~2x taller than wide
            let vx = self.rng.random_range(-16.0..16.0);
            let vy = self.rng.random_range(-14.0..-3.0);
            let ttl = self.rng.random_range(0.6..1.6);
            let glyph = GLYPHS.choose(&mut self.rng).copied().unwrap_or('*');
            let color = COLORS.choose(&mut self.rng).copied().unwrap_or(Color::Magenta);
            self.particles.push(Particle {
                x: origin.0,
                y: origin.1,
                vx,
                vy,
                ttl,
                glyph,
                color,
            });
        }
    }

    /// Advance the simulation by `dt` seconds and drop expired particles.
    pub fn tick(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.vy += GRAVITY * dt;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.ttl -= dt;
        }
        self.particles.retain(|p| p.ttl > 0.0);
    }

    /// Draw particles that fall inside `area`; the rest are clipped.
    pub fn render(&self, buf: &mut Buffer, area: Rect) {
        for p in &self.particles {
            if p.x < 0.0 || p.y < 0.0 {
                continue;
            }
            let position = Position::new(p.x as u16, p.y as u16);
            if !area.contains(position) {
                continue;
            }
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(p.glyph).set_fg(p.color);
            }
        }
    }
}
