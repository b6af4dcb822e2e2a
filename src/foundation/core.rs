use crate::foundation::error::{BackdropError, BackdropResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> BackdropResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    pub fn validate(self) -> BackdropResult<()> {
        if self.den == 0 {
            return Err(BackdropError::validation("Fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(BackdropError::validation("Fps num must be > 0"));
        }
        Ok(())
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Pixel size of the drawing surfaces, captured from the host viewport at mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> BackdropResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BackdropError::validation(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        // vello_cpu surfaces are addressed with u16 dimensions.
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(BackdropError::validation(format!(
                "viewport {}x{} exceeds {}px per side",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        Ok(())
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    pub fn center(self) -> Point {
        Point::new(self.width_f64() * 0.5, self.height_f64() * 0.5)
    }

    /// Half-open containment: `[0, width) x [0, height)`.
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0.0 && p.x < self.width_f64() && p.y >= 0.0 && p.y < self.height_f64()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
