use serde::{Deserialize, Serialize};

use crate::vector::Vector2;

/// Latest pointer sample from the host. Last write wins; nothing is queued.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub pressed: bool,
}

impl PointerState {
    pub fn at(position: Vector2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            pressed: false,
        }
    }

    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

/// Everything that gets drawn, by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palette {
    Body,
    InField,
    Field,
    Pointer,
    Direction,
}

impl Palette {
    /// Color for rendering this role [r, g, b, a]
    pub fn color(&self) -> [f32; 4] {
        match self {
            Self::Body => [1.0, 0.0, 0.0, 1.0],      // #FF0000
            Self::InField => [1.0, 0.0, 1.0, 1.0],   // #FF00FF
            Self::Field => [1.0, 1.0, 1.0, 1.0],     // White
            Self::Pointer => [1.0, 1.0, 1.0, 1.0],   // White
            Self::Direction => [0.0, 0.5, 0.0, 1.0], // Green
        }
    }
}

/// Per-body state handed to the renderer after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub position: Vector2,
    pub radius: f32,
    pub color: Palette,
    /// Whether the body was inside the field when forces were applied this tick
    pub in_field: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldView {
    pub position: Vector2,
    pub radius: f32,
}

/// One tick's worth of renderable output
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Tick number that produced this frame (1-based)
    pub tick: u64,
    pub bodies: Vec<BodyView>,
    pub field: Option<FieldView>,
    pub pointer: Vector2,
}

impl Frame {
    pub fn in_field_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.in_field).count()
    }
}
