//! Visual configuration: palettes and property-to-color mappings.
//!
//! Separate from the force laws that control how particles move. A renderer
//! closure picks a [`ColorMapping`] and the harness turns physical
//! quantities (speed, temperature, charge) into colors, so individual
//! simulations stop hand-rolling their own HSL ramps.
//!
//! # Example
//!
//! ```
//! use edusim::visuals::{ColorMapping, Palette};
//! use edusim::particle::Particle;
//! use glam::Vec2;
//!
//! let mapping = ColorMapping::Speed { palette: Palette::Fire, max_speed: 100.0 };
//! let p = Particle::at(Vec2::ZERO).with_velocity(Vec2::new(50.0, 0.0));
//! let color = mapping.color(&p);
//! assert!(color.w == 1.0);
//! ```

use crate::particle::Particle;
use glam::{Vec3, Vec4};

/// Pre-defined color palettes sampled by a [`ColorMapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Viridis - perceptually uniform, colorblind-friendly (purple to yellow).
    #[default]
    Viridis,

    /// Plasma - perceptually uniform (purple to yellow through pink).
    Plasma,

    /// Fire - dark red through orange to white-yellow.
    Fire,

    /// Ice - white through blues to near-black.
    Ice,

    /// Ocean - deep blue to cyan.
    Ocean,

    /// Grayscale - black to white.
    Grayscale,
}

impl Palette {
    /// Get the color stops for this palette (5 colors).
    pub fn colors(&self) -> [Vec3; 5] {
        match self {
            Palette::Viridis => [
                Vec3::new(0.267, 0.004, 0.329), // Dark purple
                Vec3::new(0.282, 0.140, 0.458), // Purple
                Vec3::new(0.127, 0.566, 0.551), // Teal
                Vec3::new(0.369, 0.789, 0.383), // Green
                Vec3::new(0.993, 0.906, 0.144), // Yellow
            ],
            Palette::Plasma => [
                Vec3::new(0.050, 0.030, 0.528), // Dark blue
                Vec3::new(0.494, 0.012, 0.658), // Purple
                Vec3::new(0.798, 0.280, 0.470), // Pink
                Vec3::new(0.973, 0.580, 0.254), // Orange
                Vec3::new(0.940, 0.975, 0.131), // Yellow
            ],
            Palette::Fire => [
                Vec3::new(0.1, 0.0, 0.0),   // Dark red
                Vec3::new(0.5, 0.0, 0.0),   // Red
                Vec3::new(1.0, 0.3, 0.0),   // Orange
                Vec3::new(1.0, 0.7, 0.0),   // Yellow-orange
                Vec3::new(1.0, 1.0, 0.8),   // White-yellow
            ],
            Palette::Ice => [
                Vec3::new(1.0, 1.0, 1.0),   // White
                Vec3::new(0.8, 0.9, 1.0),   // Light blue
                Vec3::new(0.4, 0.7, 1.0),   // Blue
                Vec3::new(0.1, 0.4, 0.8),   // Medium blue
                Vec3::new(0.0, 0.1, 0.4),   // Dark blue
            ],
            Palette::Ocean => [
                Vec3::new(0.0, 0.05, 0.15), // Deep blue
                Vec3::new(0.0, 0.2, 0.4),   // Dark blue
                Vec3::new(0.0, 0.4, 0.6),   // Blue
                Vec3::new(0.2, 0.6, 0.8),   // Light blue
                Vec3::new(0.6, 0.9, 1.0),   // Cyan
            ],
            Palette::Grayscale => [
                Vec3::new(0.0, 0.0, 0.0),   // Black
                Vec3::new(0.25, 0.25, 0.25),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(0.75, 0.75, 0.75),
                Vec3::new(1.0, 1.0, 1.0),   // White
            ],
        }
    }

    /// Sample the palette at `t` in [0, 1], linearly interpolating between
    /// the five stops. Out-of-range `t` clamps to the ends.
    pub fn sample(&self, t: f32) -> Vec4 {
        let stops = self.colors();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let scaled = t * (stops.len() - 1) as f32;
        let idx = (scaled as usize).min(stops.len() - 2);
        let frac = scaled - idx as f32;
        stops[idx].lerp(stops[idx + 1], frac).extend(1.0)
    }
}

/// How to map a particle's physical properties to a color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorMapping {
    /// One fixed color for every particle.
    Fixed(Vec4),

    /// Palette position from speed: 0 at rest, 1 at `max_speed` and above.
    Speed {
        /// Palette to sample.
        palette: Palette,
        /// Speed mapped to the top of the palette.
        max_speed: f32,
    },

    /// Palette position from temperature between `min` and `max`.
    Temperature {
        /// Palette to sample.
        palette: Palette,
        /// Temperature at the bottom of the palette.
        min: f32,
        /// Temperature at the top of the palette.
        max: f32,
    },

    /// Sign-of-charge coloring (field and electrostatics sims).
    Charge {
        /// Color for positive charges.
        positive: Vec4,
        /// Color for negative charges.
        negative: Vec4,
        /// Color for neutral particles.
        neutral: Vec4,
    },

    /// Index into a fixed set of colors by the particle's `kind` tag,
    /// wrapping around when the tag exceeds the set.
    Kind(Vec<Vec4>),
}

impl ColorMapping {
    /// Color for one particle under this mapping.
    pub fn color(&self, p: &Particle) -> Vec4 {
        match self {
            ColorMapping::Fixed(color) => *color,
            ColorMapping::Speed { palette, max_speed } => {
                let t = if *max_speed > 0.0 { p.speed() / max_speed } else { 0.0 };
                palette.sample(t)
            }
            ColorMapping::Temperature { palette, min, max } => {
                let span = max - min;
                let t = if span > 0.0 { (p.temperature - min) / span } else { 0.0 };
                palette.sample(t)
            }
            ColorMapping::Charge { positive, negative, neutral } => {
                if p.charge > 0.0 {
                    *positive
                } else if p.charge < 0.0 {
                    *negative
                } else {
                    *neutral
                }
            }
            ColorMapping::Kind(colors) => {
                if colors.is_empty() {
                    Vec4::ONE
                } else {
                    colors[p.kind as usize % colors.len()]
                }
            }
        }
    }
}
