use crate::foundation::core::{Canvas, Point, Vec2};
use crate::layout::config::Starting6Layout;
use crate::scene::record::Position;

/// Maps reference-canvas coordinates onto an actual canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceScale {
    canvas: Canvas,
    scale: Vec2,
}

impl ReferenceScale {
    /// Scale for `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            scale: canvas.scale_from_reference(),
        }
    }

    /// Target canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Reference point to canvas point.
    pub fn point(&self, x: f64, y: f64) -> Point {
        Point::new(x * self.scale.x, y * self.scale.y)
    }

    /// Point whose x is a fraction of the canvas width and y a reference coordinate.
    pub fn column(&self, x_frac: f64, y: f64) -> Point {
        Point::new(x_frac * f64::from(self.canvas.width), y * self.scale.y)
    }

    /// Horizontal reference length.
    pub fn x(&self, v: f64) -> f64 {
        v * self.scale.x
    }

    /// Vertical reference length.
    pub fn y(&self, v: f64) -> f64 {
        v * self.scale.y
    }

    /// Isotropic reference length (radii, logo edges).
    pub fn len(&self, v: f64) -> f64 {
        v * self.scale.x.min(self.scale.y)
    }

    /// Font size.
    pub fn font(&self, px: f32) -> f32 {
        (f64::from(px) * self.scale.x.min(self.scale.y)) as f32
    }
}

/// Where one player card goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSlot {
    /// Row the card belongs to.
    pub position: Position,
    /// Index inside the row, left to right.
    pub index: usize,
    /// Card center (name anchor) in canvas pixels.
    pub center: Point,
}

/// The six card slots: forwards left to right, then defenders, then the goalie.
pub fn card_slots(layout: &Starting6Layout, scale: &ReferenceScale) -> [CardSlot; 6] {
    let rows = &layout.rows;
    let fw = |i: usize| CardSlot {
        position: Position::Forward,
        index: i,
        center: scale.column(rows.forwards_x[i], rows.forwards_y[i]),
    };
    let df = |i: usize| CardSlot {
        position: Position::Defense,
        index: i,
        center: scale.column(rows.defense_x[i], rows.defense_y),
    };
    [
        fw(0),
        fw(1),
        fw(2),
        df(0),
        df(1),
        CardSlot {
            position: Position::Goalie,
            index: 0,
            center: scale.column(rows.goalie_x, rows.goalie_y),
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/layout/slots.rs"]
mod tests;
