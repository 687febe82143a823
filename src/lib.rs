//! Framewright is the geometric core of a template-based canvas editor.
//!
//! A template is authored once in a fixed-budget *normalized* space and
//! re-projected to any concrete *export* size selected by a ratio identifier
//! (`"16:9"`, `"728x90"`). Shapes are generated analytically from their box
//! rather than from fixed assets.
//!
//! # Pieces
//!
//! 1. **Ratio resolution**: ratio id → export dimensions, normalized dimensions
//!    and the scale factors between them ([`resolve_spaces`]).
//! 2. **Frame transforms**: [`normalize_frame`] / [`denormalize_frame`] at
//!    import/export boundaries.
//! 3. **Geometry kernel**: [`regular_polygon`], [`star`] and the
//!    `"x,y x,y …"` point-list format ([`points_to_polygon_attribute`]).
//! 4. **Shape registry**: shape id + box + options → [`ShapeDescriptor`]
//!    ([`shape_geometry`]).
//! 5. **Slot placement**: default frames for new slots
//!    ([`default_slot_frame`], [`default_slot_frame_by_name`]).
//!
//! Everything is pure and synchronous. Ratio parsing and shape options never
//! fail: malformed input falls back to 1:1 / 1080×1080 or clamped values.
//! Only the geometry kernel rejects structurally invalid input.
#![forbid(unsafe_code)]

mod foundation;
mod geometry;
mod ratio;
mod shapes;
mod slots;
mod template;

pub use foundation::core::{BezPath, Dimensions, Frame, Point, Rect, ScaleFactor, Size, Vec2};
pub use foundation::error::{FramewrightError, FramewrightResult};
pub use geometry::kernel::{
    format_coord, parse_polygon_attribute, points_to_polygon_attribute, regular_polygon, star,
};
pub use ratio::resolver::{
    RatioPolicy, RatioSpaces, RatioSpec, export_dimensions, export_scale, normalization_scale,
    normalized_dimensions, parse_aspect_ratio, resolve_spaces,
};
pub use ratio::transform::{
    denormalize_frame, denormalize_frames, normalize_frame, normalize_frames,
};
pub use shapes::assets::{AssetPath, AssetPathSource, AssetPathTable};
pub use shapes::descriptor::ShapeDescriptor;
pub use shapes::registry::{
    ShapeCategory, ShapeDefinition, ShapeOptions, asset_shape_keys, shape_definition,
    shape_definitions, shape_geometry,
};
pub use slots::defaults::{
    NameRole, SlotSizeConfig, SlotType, default_slot_frame, default_slot_frame_by_name,
};
pub use template::model::{Slot, SlotShape, Template};
