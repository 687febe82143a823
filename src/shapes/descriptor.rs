use kurbo::{Ellipse, Line, RoundedRect, Shape as _};

use crate::{
    foundation::{
        core::{BezPath, Rect},
        error::{FramewrightError, FramewrightResult},
    },
    geometry::kernel::parse_polygon_attribute,
    shapes::assets::AssetPathSource,
};

// Flattening tolerance for curved outlines, in pixels.
const OUTLINE_TOLERANCE: f64 = 0.1;

/// Renderer-facing geometry for one shape instance.
///
/// The `type` tags (`rect`, `ellipse`, `polygon`, `line`, `asset`) are the
/// contract with the rendering layer. Coordinates are local to the shape's box,
/// origin at its top-left corner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeDescriptor {
    /// Rectangle filling the box, optionally with rounded corners.
    Rect {
        width: f64,
        height: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rx: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ry: Option<f64>,
    },
    /// Axis-aligned ellipse.
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    /// Closed polygon as an `"x,y x,y …"` point list.
    Polygon { points: String },
    /// Straight segment.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Static path asset stretched over the box.
    Asset { key: String, width: f64, height: f64 },
}

impl ShapeDescriptor {
    /// The serialized variant tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Ellipse { .. } => "ellipse",
            Self::Polygon { .. } => "polygon",
            Self::Line { .. } => "line",
            Self::Asset { .. } => "asset",
        }
    }

    /// Build a kurbo outline for this descriptor.
    ///
    /// Asset descriptors are looked up in `assets` and fitted to the box.
    pub fn outline(&self, assets: &dyn AssetPathSource) -> FramewrightResult<BezPath> {
        match self {
            Self::Rect {
                width,
                height,
                rx,
                ry,
            } => {
                let rect = Rect::new(0.0, 0.0, *width, *height);
                match rx.or(*ry) {
                    Some(r) if r > 0.0 => {
                        Ok(RoundedRect::from_rect(rect, r).to_path(OUTLINE_TOLERANCE))
                    }
                    _ => Ok(rect.to_path(OUTLINE_TOLERANCE)),
                }
            }
            Self::Ellipse { cx, cy, rx, ry } => {
                Ok(Ellipse::new((*cx, *cy), (*rx, *ry), 0.0).to_path(OUTLINE_TOLERANCE))
            }
            Self::Polygon { points } => {
                let pts = parse_polygon_attribute(points)?;
                let mut path = BezPath::new();
                let mut iter = pts.into_iter();
                if let Some(first) = iter.next() {
                    path.move_to(first);
                    for p in iter {
                        path.line_to(p);
                    }
                    path.close_path();
                }
                Ok(path)
            }
            Self::Line { x1, y1, x2, y2 } => {
                Ok(Line::new((*x1, *y1), (*x2, *y2)).to_path(OUTLINE_TOLERANCE))
            }
            Self::Asset { key, width, height } => assets
                .path_data(key)
                .ok_or_else(|| {
                    FramewrightError::validation(format!("no path data for asset '{key}'"))
                })?
                .fit(*width, *height),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/descriptor.rs"]
mod tests;
