use std::{collections::BTreeMap, sync::LazyLock};

use crate::{
    foundation::{
        core::{Point, Size},
        error::FramewrightResult,
    },
    geometry::kernel::{points_to_polygon_attribute, regular_polygon, star},
    shapes::descriptor::ShapeDescriptor,
};

/// Grouping used by shape pickers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ShapeCategory {
    /// Rectangles and ellipses.
    Basic,
    /// Procedural polygons and stars.
    Polygon,
    /// Straight lines.
    Line,
    /// Static decorative paths.
    Decorative,
    /// Static flowchart symbols.
    Flowchart,
}

/// Per-instance shape options as stored on a slot (`shape.options`).
///
/// Counts are plain numbers so loosely typed documents still load; they are
/// floored and clamped when geometry is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeOptions {
    /// Side count for `regularPolygon` (min 3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sides: Option<f64>,
    /// Tip count for `star` (min 2).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    /// Inner/outer radius ratio for `star`, clamped to `[0.05, 0.95]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_ratio: Option<f64>,
    /// Rotation in degrees of the first vertex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Corner radius for `roundedRectangle`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
}

impl ShapeOptions {
    /// No options set.
    pub const NONE: Self = Self {
        sides: None,
        points: None,
        inner_ratio: None,
        rotation: None,
        corner_radius: None,
    };

    /// Field-wise fallback: values set on `self` win over `defaults`.
    pub fn or(self, defaults: Self) -> Self {
        Self {
            sides: self.sides.or(defaults.sides),
            points: self.points.or(defaults.points),
            inner_ratio: self.inner_ratio.or(defaults.inner_ratio),
            rotation: self.rotation.or(defaults.rotation),
            corner_radius: self.corner_radius.or(defaults.corner_radius),
        }
    }
}

type GeometryFn = fn(&str, f64, f64, &ShapeOptions) -> ShapeDescriptor;

/// Static registry entry for one shape id.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDefinition {
    /// Stable identifier stored in templates.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Picker category.
    pub category: ShapeCategory,
    /// Size of a newly inserted shape, in export pixels.
    pub default_size: Size,
    /// Options used when an instance leaves a field unset.
    pub default_options: ShapeOptions,
    #[serde(skip)]
    build: GeometryFn,
}

impl ShapeDefinition {
    /// Descriptor for a `width` x `height` box with live `options`.
    pub fn geometry(
        &self,
        width: f64,
        height: f64,
        options: Option<&ShapeOptions>,
    ) -> ShapeDescriptor {
        let options = options
            .copied()
            .unwrap_or_default()
            .or(self.default_options);
        (self.build)(self.id, width, height, &options)
    }

    /// True for shapes backed by a static path asset.
    pub fn is_asset(&self) -> bool {
        matches!(
            self.category,
            ShapeCategory::Decorative | ShapeCategory::Flowchart
        )
    }
}

const POLYGON_ROTATION: f64 = -90.0;
const MIN_SIDES: u32 = 3;
const MIN_STAR_POINTS: u32 = 2;
const INNER_RATIO_RANGE: (f64, f64) = (0.05, 0.95);
// Upper bound on side/tip counts.
const MAX_COUNT: u32 = 1024;

static DEFINITIONS: &[ShapeDefinition] = &[
    ShapeDefinition {
        id: "rectangle",
        label: "Rectangle",
        category: ShapeCategory::Basic,
        default_size: Size::new(200.0, 200.0),
        default_options: ShapeOptions::NONE,
        build: rectangle,
    },
    ShapeDefinition {
        id: "roundedRectangle",
        label: "Rounded rectangle",
        category: ShapeCategory::Basic,
        default_size: Size::new(200.0, 200.0),
        default_options: ShapeOptions {
            corner_radius: Some(16.0),
            ..ShapeOptions::NONE
        },
        build: rounded_rectangle,
    },
    ShapeDefinition {
        id: "ellipse",
        label: "Ellipse",
        category: ShapeCategory::Basic,
        default_size: Size::new(200.0, 140.0),
        default_options: ShapeOptions::NONE,
        build: ellipse,
    },
    ShapeDefinition {
        id: "circle",
        label: "Circle",
        category: ShapeCategory::Basic,
        default_size: Size::new(200.0, 200.0),
        default_options: ShapeOptions::NONE,
        build: circle,
    },
    ShapeDefinition {
        id: "line",
        label: "Line",
        category: ShapeCategory::Line,
        default_size: Size::new(240.0, 8.0),
        default_options: ShapeOptions::NONE,
        build: line,
    },
    ShapeDefinition {
        id: "triangle",
        label: "Triangle",
        category: ShapeCategory::Polygon,
        default_size: Size::new(200.0, 200.0),
        default_options: ShapeOptions {
            rotation: Some(POLYGON_ROTATION),
            ..ShapeOptions::NONE
        },
        build: triangle,
    },
    ShapeDefinition {
        id: "regularPolygon",
        label: "Polygon",
        category: ShapeCategory::Polygon,
        default_size: Size::new(200.0, 200.0),
        default_options: ShapeOptions {
            sides: Some(6.0),
            rotation: Some(POLYGON_ROTATION),
            ..ShapeOptions::NONE
        },
        build: polygon,
    },
    ShapeDefinition {
        id: "star",
        label: "Star",
        category: ShapeCategory::Polygon,
        default_size: Size::new(200.0, 200.0),
        default_options: ShapeOptions {
            points: Some(5.0),
            inner_ratio: Some(0.5),
            rotation: Some(POLYGON_ROTATION),
            ..ShapeOptions::NONE
        },
        build: star_shape,
    },
    asset_definition("heart", "Heart", ShapeCategory::Decorative, 200.0, 180.0),
    asset_definition("cloud", "Cloud", ShapeCategory::Decorative, 240.0, 160.0),
    asset_definition("banner", "Banner", ShapeCategory::Decorative, 300.0, 100.0),
    asset_definition("speechBubble", "Speech bubble", ShapeCategory::Decorative, 240.0, 180.0),
    asset_definition("flowchart/process", "Process", ShapeCategory::Flowchart, 200.0, 120.0),
    asset_definition("flowchart/decision", "Decision", ShapeCategory::Flowchart, 160.0, 160.0),
    asset_definition("flowchart/terminator", "Terminator", ShapeCategory::Flowchart, 200.0, 80.0),
    asset_definition("flowchart/document", "Document", ShapeCategory::Flowchart, 200.0, 140.0),
    asset_definition("flowchart/data", "Data", ShapeCategory::Flowchart, 200.0, 120.0),
];

static BY_ID: LazyLock<BTreeMap<&'static str, &'static ShapeDefinition>> =
    LazyLock::new(|| DEFINITIONS.iter().map(|def| (def.id, def)).collect());

/// Registry entry for `id`.
pub fn shape_definition(id: &str) -> Option<&'static ShapeDefinition> {
    BY_ID.get(id).copied()
}

/// All registered shapes in picker order.
pub fn shape_definitions() -> impl Iterator<Item = &'static ShapeDefinition> {
    DEFINITIONS.iter()
}

/// Ids of shapes that resolve to static path assets.
pub fn asset_shape_keys() -> impl Iterator<Item = &'static str> {
    DEFINITIONS.iter().filter(|def| def.is_asset()).map(|def| def.id)
}

/// Descriptor for shape `id` on a `width` x `height` box, `None` for unknown
/// ids.
pub fn shape_geometry(
    id: &str,
    width: f64,
    height: f64,
    options: Option<&ShapeOptions>,
) -> Option<ShapeDescriptor> {
    shape_definition(id).map(|def| def.geometry(width, height, options))
}

const fn asset_definition(
    id: &'static str,
    label: &'static str,
    category: ShapeCategory,
    width: f64,
    height: f64,
) -> ShapeDefinition {
    ShapeDefinition {
        id,
        label,
        category,
        default_size: Size::new(width, height),
        default_options: ShapeOptions::NONE,
        build: asset,
    }
}

fn rectangle(_: &str, width: f64, height: f64, _: &ShapeOptions) -> ShapeDescriptor {
    ShapeDescriptor::Rect {
        width,
        height,
        rx: None,
        ry: None,
    }
}

fn rounded_rectangle(
    _: &str,
    width: f64,
    height: f64,
    options: &ShapeOptions,
) -> ShapeDescriptor {
    let max_radius = (width.min(height) / 2.0).max(0.0);
    let radius = options
        .corner_radius
        .filter(|r| r.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, max_radius);
    ShapeDescriptor::Rect {
        width,
        height,
        rx: Some(radius),
        ry: Some(radius),
    }
}

fn ellipse(_: &str, width: f64, height: f64, _: &ShapeOptions) -> ShapeDescriptor {
    ShapeDescriptor::Ellipse {
        cx: width / 2.0,
        cy: height / 2.0,
        rx: width / 2.0,
        ry: height / 2.0,
    }
}

fn circle(_: &str, width: f64, height: f64, _: &ShapeOptions) -> ShapeDescriptor {
    let r = width.min(height) / 2.0;
    ShapeDescriptor::Ellipse {
        cx: width / 2.0,
        cy: height / 2.0,
        rx: r,
        ry: r,
    }
}

fn line(_: &str, width: f64, height: f64, _: &ShapeOptions) -> ShapeDescriptor {
    ShapeDescriptor::Line {
        x1: 0.0,
        y1: height / 2.0,
        x2: width,
        y2: height / 2.0,
    }
}

fn triangle(_: &str, width: f64, height: f64, options: &ShapeOptions) -> ShapeDescriptor {
    let (cx, cy, r) = inscribed_circle(width, height);
    polygon_descriptor(regular_polygon(MIN_SIDES, cx, cy, r, rotation(options)))
}

fn polygon(_: &str, width: f64, height: f64, options: &ShapeOptions) -> ShapeDescriptor {
    let (cx, cy, r) = inscribed_circle(width, height);
    let sides = clamp_count(options.sides, MIN_SIDES, "sides");
    polygon_descriptor(regular_polygon(sides, cx, cy, r, rotation(options)))
}

fn star_shape(_: &str, width: f64, height: f64, options: &ShapeOptions) -> ShapeDescriptor {
    let (cx, cy, r) = inscribed_circle(width, height);
    let points = clamp_count(options.points, MIN_STAR_POINTS, "points");
    let (lo, hi) = INNER_RATIO_RANGE;
    let ratio = options.inner_ratio.filter(|v| v.is_finite()).unwrap_or(0.5);
    let clamped = ratio.clamp(lo, hi);
    if clamped != ratio {
        tracing::debug!(ratio, clamped, "star inner ratio clamped");
    }
    polygon_descriptor(star(points, cx, cy, r, r * clamped, rotation(options)))
}

fn asset(id: &str, width: f64, height: f64, _: &ShapeOptions) -> ShapeDescriptor {
    ShapeDescriptor::Asset {
        key: id.to_string(),
        width,
        height,
    }
}

fn inscribed_circle(width: f64, height: f64) -> (f64, f64, f64) {
    (width / 2.0, height / 2.0, width.min(height) / 2.0)
}

fn rotation(options: &ShapeOptions) -> f64 {
    options
        .rotation
        .filter(|v| v.is_finite())
        .unwrap_or(POLYGON_ROTATION)
}

fn clamp_count(value: Option<f64>, min: u32, field: &'static str) -> u32 {
    let floored = value.filter(|v| v.is_finite()).map(f64::floor).unwrap_or(0.0);
    if floored < f64::from(min) {
        tracing::debug!(field, value = ?value, min, "shape option raised to minimum");
        return min;
    }
    if floored > f64::from(MAX_COUNT) {
        tracing::debug!(field, value = ?value, max = MAX_COUNT, "shape option lowered to maximum");
        return MAX_COUNT;
    }
    floored as u32
}

fn polygon_descriptor(points: FramewrightResult<Vec<Point>>) -> ShapeDescriptor {
    // Only a zero or NaN radius reaches the error path; the options are
    // already clamped.
    let points = points.unwrap_or_else(|err| {
        tracing::debug!(%err, "degenerate polygon box");
        Vec::new()
    });
    ShapeDescriptor::Polygon {
        points: points_to_polygon_attribute(&points),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/registry.rs"]
mod tests;
