//! 2D drawing surface abstraction.
//!
//! Engines render through the [`Canvas`] trait: a small vocabulary of shape
//! primitives a host backs with whatever surface it has (an HTML canvas
//! context, a pixel buffer, a plotter). Rendering is a pure function of the
//! current state: the engine never mutates physics inside `render`, and all
//! visual randomness comes from per-particle phase state plus
//! [`twinkle`], so drawing the same state twice produces the same commands.
//!
//! [`DrawList`] is the reference backend: it records every call as a
//! comparable [`DrawCommand`], which is also how the idempotent-render tests
//! observe what a simulation painted.

use glam::{Vec2, Vec4};

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface with a color.
    Clear(Vec4),
    /// Filled circle.
    FillCircle {
        /// Center point.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// RGBA fill color, components in [0, 1].
        color: Vec4,
    },
    /// Circle outline.
    StrokeCircle {
        /// Center point.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Stroke width.
        width: f32,
        /// RGBA stroke color.
        color: Vec4,
    },
    /// Straight line segment.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke width.
        width: f32,
        /// RGBA stroke color.
        color: Vec4,
    },
    /// Connected line strip.
    Polyline {
        /// Vertices in order.
        points: Vec<Vec2>,
        /// Stroke width.
        width: f32,
        /// RGBA stroke color.
        color: Vec4,
    },
    /// Axis-aligned filled rectangle.
    FillRect {
        /// Top-left corner.
        min: Vec2,
        /// Width and height.
        size: Vec2,
        /// RGBA fill color.
        color: Vec4,
    },
    /// Text label (annotations, axis captions).
    Text {
        /// Baseline origin.
        position: Vec2,
        /// The text itself.
        text: String,
        /// Font size in surface units.
        size: f32,
        /// RGBA color.
        color: Vec4,
    },
}

/// A 2D drawing surface.
///
/// Implementations must not feed anything back into the simulation; the
/// engine hands out only immutable state while rendering.
pub trait Canvas {
    /// Fill the whole surface with a color.
    fn clear(&mut self, color: Vec4);
    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4);
    /// Draw a circle outline.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Vec4);
    /// Draw a line segment.
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4);
    /// Draw a connected line strip.
    fn polyline(&mut self, points: &[Vec2], width: f32, color: Vec4);
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Vec4);
    /// Draw a text label.
    fn text(&mut self, position: Vec2, text: &str, size: f32, color: Vec4);
}

/// Canvas backend that records commands instead of rasterizing.
///
/// Two renders of the same state yield equal command lists, which is the
/// observable form of the render-idempotence contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Vec4) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec4) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Vec4) {
        self.commands.push(DrawCommand::StrokeCircle { center, radius, width, color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Vec4) {
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }

    fn polyline(&mut self, points: &[Vec2], width: f32, color: Vec4) {
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), width, color });
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::FillRect { min, size, color });
    }

    fn text(&mut self, position: Vec2, text: &str, size: f32, color: Vec4) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            size,
            color,
        });
    }
}

/// Deterministic twinkle: a 0..1 brightness wave from elapsed time and a
/// per-particle phase.
///
/// Replaces the fresh-RNG-per-frame star effects of older sims; the phase is
/// state set once at spawn, so replays and repeated renders agree.
#[inline]
pub fn twinkle(elapsed: f32, frequency: f32, phase: f32) -> f32 {
    0.5 + 0.5 * (std::f32::consts::TAU * frequency * elapsed + phase).sin()
}
