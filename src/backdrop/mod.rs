//! Decorative animated backdrop behind the hero section.
//!
//! A fixed field of drifting mathematical glyphs, pulsing data nodes, and
//! wireframe markers. Positions are a pure function of elapsed time and
//! each particle's base position and phase, so the backdrop carries no
//! per-frame state beyond a clock. It draws only into cells the section
//! text left empty, keeping the copy legible, and can be frozen entirely
//! for reduced motion.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

#[derive(Clone, Copy)]
enum ParticleKind {
    /// A floating mathematical symbol.
    Glyph(char),
    /// A small node that pulses through dot sizes.
    Node,
    /// A wireframe-style marker that bobs in place.
    Marker,
}

struct Particle {
    kind: ParticleKind,
    /// Base position as fractions of the backdrop rect.
    base: (f32, f32),
    /// Phase offset so particles drift out of step.
    phase: f32,
    color: Color,
}

// Accent hues for the particles.
const SKY: Color = Color::Rgb(14, 165, 233);
const TEAL: Color = Color::Rgb(20, 184, 166);
const VIOLET: Color = Color::Rgb(139, 92, 246);
const AMBER: Color = Color::Rgb(245, 158, 11);
const ROSE: Color = Color::Rgb(239, 68, 68);
const CYAN: Color = Color::Rgb(6, 182, 212);
const EMERALD: Color = Color::Rgb(16, 185, 129);
const ORANGE: Color = Color::Rgb(249, 115, 22);
const PURPLE: Color = Color::Rgb(168, 85, 247);
const PINK: Color = Color::Rgb(236, 72, 153);
const SLATE: Color = Color::Rgb(100, 116, 139);
const INDIGO: Color = Color::Rgb(99, 102, 241);

/// The particle field, with hand-placed base positions.
const PARTICLES: &[Particle] = &[
    Particle { kind: ParticleKind::Glyph('σ'), base: (0.08, 0.15), phase: 0.0, color: SKY },
    Particle { kind: ParticleKind::Glyph('π'), base: (0.82, 0.20), phase: 1.1, color: TEAL },
    Particle { kind: ParticleKind::Glyph('Δ'), base: (0.25, 0.55), phase: 2.3, color: VIOLET },
    Particle { kind: ParticleKind::Glyph('∫'), base: (0.90, 0.65), phase: 3.6, color: AMBER },
    Particle { kind: ParticleKind::Glyph('∞'), base: (0.12, 0.80), phase: 4.2, color: ROSE },
    Particle { kind: ParticleKind::Glyph('α'), base: (0.68, 0.10), phase: 5.0, color: CYAN },
    Particle { kind: ParticleKind::Glyph('β'), base: (0.35, 0.30), phase: 0.7, color: EMERALD },
    Particle { kind: ParticleKind::Glyph('γ'), base: (0.93, 0.42), phase: 1.9, color: ORANGE },
    Particle { kind: ParticleKind::Glyph('λ'), base: (0.05, 0.45), phase: 2.8, color: PURPLE },
    Particle { kind: ParticleKind::Glyph('θ'), base: (0.60, 0.85), phase: 3.1, color: PINK },
    Particle { kind: ParticleKind::Node, base: (0.18, 0.25), phase: 0.4, color: SLATE },
    Particle { kind: ParticleKind::Node, base: (0.74, 0.50), phase: 1.5, color: SKY },
    Particle { kind: ParticleKind::Node, base: (0.40, 0.70), phase: 2.6, color: SLATE },
    Particle { kind: ParticleKind::Node, base: (0.86, 0.78), phase: 3.7, color: TEAL },
    Particle { kind: ParticleKind::Node, base: (0.10, 0.60), phase: 4.8, color: SLATE },
    Particle { kind: ParticleKind::Node, base: (0.55, 0.18), phase: 5.9, color: SKY },
    Particle { kind: ParticleKind::Marker, base: (0.30, 0.12), phase: 0.9, color: SLATE },
    Particle { kind: ParticleKind::Marker, base: (0.48, 0.88), phase: 2.0, color: SLATE },
    Particle { kind: ParticleKind::Marker, base: (0.78, 0.32), phase: 3.3, color: INDIGO },
    Particle { kind: ParticleKind::Marker, base: (0.20, 0.90), phase: 4.4, color: EMERALD },
];

// Drift speeds and amplitudes, as fractions of the rect.
const DRIFT_X_SPEED: f32 = 0.6;
const DRIFT_Y_SPEED: f32 = 0.8;
const DRIFT_X_AMP: f32 = 0.04;
const DRIFT_Y_AMP: f32 = 0.06;
const PULSE_SPEED: f32 = 2.5;

pub struct Backdrop {
    elapsed: f32,
    animate: bool,
}

impl Backdrop {
    /// `animate = false` freezes the field at its base layout.
    pub fn new(animate: bool) -> Self {
        Backdrop {
            elapsed: 0.0,
            animate,
        }
    }

    /// Advance the clock. A no-op when animation is off.
    pub fn tick(&mut self, dt: Duration) {
        if self.animate {
            self.elapsed += dt.as_secs_f32();
        }
    }

    /// Draw the field into `area`, touching only empty cells so the text
    /// rendered before it stays intact.
    pub fn render(&self, buf: &mut Buffer, area: Rect) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        let t = self.elapsed;
        for particle in PARTICLES {
            let (bx, by) = particle.base;
            let x = bx + (t * DRIFT_X_SPEED + particle.phase).cos() * DRIFT_X_AMP;
            let y = by + (t * DRIFT_Y_SPEED + particle.phase).sin() * DRIFT_Y_AMP;
            let col = area.x + (x.clamp(0.0, 0.99) * area.width as f32) as u16;
            let row = area.y + (y.clamp(0.0, 0.99) * area.height as f32) as u16;
            if col >= area.right() || row >= area.bottom() {
                continue;
            }
            let symbol = match particle.kind {
                ParticleKind::Glyph(c) => c,
                ParticleKind::Node => pulse_dot(t, particle.phase),
                ParticleKind::Marker => '▢',
            };
            let cell = &mut buf[(col, row)];
            if cell.symbol() == " " {
                cell.set_char(symbol);
                cell.set_fg(particle.color);
            }
        }
    }
}

/// Dot size following the pulse, smallest at the trough.
fn pulse_dot(t: f32, phase: f32) -> char {
    let pulse = (t * PULSE_SPEED + phase).sin();
    if pulse > 0.4 {
        '●'
    } else if pulse > -0.4 {
        '•'
    } else {
        '·'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_backdrop_ignores_ticks() {
        let mut still = Backdrop::new(false);
        still.tick(Duration::from_secs(5));
        assert_eq!(still.elapsed, 0.0);

        let mut moving = Backdrop::new(true);
        moving.tick(Duration::from_secs(5));
        assert!(moving.elapsed > 0.0);
    }

    #[test]
    fn render_fills_only_empty_cells() {
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        buf[(3, 1)].set_char('X');
        let backdrop = Backdrop::new(true);
        backdrop.render(&mut buf, area);
        assert_eq!(buf[(3, 1)].symbol(), "X");
        // At least one particle landed somewhere in the rect.
        let drawn = area
            .positions()
            .filter(|p| buf[(p.x, p.y)].symbol() != " ")
            .count();
        assert!(drawn > 1);
    }

    #[test]
    fn render_tolerates_tiny_areas() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        Backdrop::new(true).render(&mut buf, area);
    }
}
