use crate::foundation::color::Rgba8;
use crate::foundation::core::{Point, Vec2, Viewport};

/// One color stop of a radial gradient. `offset` runs from the centre (0) to the rim (1).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba8,
}

impl GradientStop {
    pub const fn new(offset: f64, color: Rgba8) -> Self {
        Self { offset, color }
    }
}

/// Backend-agnostic drawing primitive, in viewport pixel coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DrawOp {
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba8,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f64,
        color: Rgba8,
    },
    /// Stroked segment of an ellipse; angles in radians, `x_rotation` tilts the ellipse.
    StrokeArc {
        center: Point,
        radii: Vec2,
        start_angle: f64,
        sweep_angle: f64,
        x_rotation: f64,
        width: f64,
        color: Rgba8,
    },
    RadialGradient {
        center: Point,
        radius: f64,
        stops: Vec<GradientStop>,
        opacity: f32,
    },
}

/// Raster target a layer paints onto each frame.
pub trait DrawSurface {
    /// Pixel size of the surface.
    fn viewport(&self) -> Viewport;

    /// Discard everything drawn so far.
    fn clear(&mut self);

    /// Append one primitive.
    fn draw(&mut self, op: DrawOp);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.draw(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Rgba8) {
        self.draw(DrawOp::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    fn radial_gradient(&mut self, center: Point, radius: f64, stops: Vec<GradientStop>, opacity: f32) {
        self.draw(DrawOp::RadialGradient {
            center,
            radius,
            stops,
            opacity,
        });
    }
}

/// Recording surface: keeps the ops of the current frame in draw order.
///
/// Layers paint into their own list; the backdrop concatenates lists into one frame which a
/// backend rasterises.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayList {
    viewport: Viewport,
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Append a copy of `other`'s ops on top of this list.
    pub fn extend_from(&mut self, other: &DisplayList) {
        self.ops.extend_from_slice(&other.ops);
    }

    /// Re-size the surface; recorded ops are discarded.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.ops.clear();
    }
}

impl DrawSurface for DisplayList {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) {
        self.ops.clear();
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/display_list.rs"]
mod tests;
