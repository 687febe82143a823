pub use kurbo::{BezPath, Point, Rect, Size, Vec2};

/// Integer pixel dimensions of a canvas.
///
/// Both export and normalized (authoring) sizes use this type; which space a
/// value belongs to is tracked by the caller.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Dimensions {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl Dimensions {
    /// Build dimensions from width and height.
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Width divided by height.
    pub fn aspect(self) -> f64 {
        f64::from(self.w) / f64::from(self.h.max(1))
    }

    /// Dimensions as a kurbo [`Size`].
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.w), f64::from(self.h))
    }
}

/// Per-axis multiplicative factor between two coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleFactor {
    /// Horizontal factor (> 0).
    pub scale_x: f64,
    /// Vertical factor (> 0).
    pub scale_y: f64,
}

impl ScaleFactor {
    /// The identity factor.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
    };

    /// Factor mapping sizes in `from` onto sizes in `to`, per axis.
    pub fn between(from: Dimensions, to: Dimensions) -> Self {
        Self {
            scale_x: f64::from(to.w) / f64::from(from.w),
            scale_y: f64::from(to.h) / f64::from(from.h),
        }
    }
}

/// Position, size and optional rotation (degrees) of a placed object.
///
/// A frame does not record which coordinate space it lives in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Rotation in degrees; scale-invariant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Frame {
    /// Unrotated frame.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: None,
        }
    }

    /// Same frame with `rotation` degrees.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Axis-aligned bounds, ignoring rotation.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Center of the frame box.
    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// Frame with position and size rounded to whole pixels.
    ///
    /// Transforms never round on their own; this is for callers at an export
    /// boundary.
    pub fn snapped(&self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
            width: self.width.round(),
            height: self.height.round(),
            rotation: self.rotation,
        }
    }

    /// Multiply position and size by `scale`; rotation is copied.
    pub fn scaled(&self, scale: ScaleFactor) -> Self {
        Self {
            x: self.x * scale.scale_x,
            y: self.y * scale.scale_y,
            width: self.width * scale.scale_x,
            height: self.height * scale.scale_y,
            rotation: self.rotation,
        }
    }

    /// True when every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.rotation.is_none_or(f64::is_finite)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
