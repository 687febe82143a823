use std::{collections::BTreeMap, path::Path};

use anyhow::Context as _;
use kurbo::Affine;

use crate::{
    foundation::{
        core::{BezPath, Rect},
        error::{FramewrightError, FramewrightResult},
    },
    shapes::registry::asset_shape_keys,
};

/// Lookup of static path data for decorative and flowchart shapes.
///
/// The table is supplied by the host; keys match the asset shape ids in the
/// registry (`heart`, `flowchart/process`, ...).
pub trait AssetPathSource {
    /// Path data registered for `key`, if any.
    fn path_data(&self, key: &str) -> Option<&AssetPath>;
}

/// SVG path data authored inside a view box.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPath {
    /// SVG `d` attribute.
    pub d: String,
    /// `[min_x, min_y, width, height]`, as in an SVG `viewBox`.
    pub view_box: [f64; 4],
}

impl AssetPath {
    /// View box as a kurbo rectangle.
    pub fn view_rect(&self) -> Rect {
        let [x, y, w, h] = self.view_box;
        Rect::new(x, y, x + w, y + h)
    }

    /// Parse the path data without transforming it.
    pub fn parse(&self) -> FramewrightResult<BezPath> {
        BezPath::from_svg(&self.d)
            .map_err(|e| FramewrightError::validation(format!("invalid path data: {e}")))
    }

    /// Path stretched from its view box onto a `width` x `height` box at the
    /// origin.
    pub fn fit(&self, width: f64, height: f64) -> FramewrightResult<BezPath> {
        let view = self.view_rect();
        if !(view.width() > 0.0 && view.height() > 0.0) {
            return Err(FramewrightError::validation(format!(
                "view box must have positive size, got {:?}",
                self.view_box
            )));
        }
        let mut path = self.parse()?;
        let to_box = Affine::scale_non_uniform(width / view.width(), height / view.height())
            * Affine::translate((-view.x0, -view.y0));
        path.apply_affine(to_box);
        Ok(path)
    }
}

/// JSON-loadable [`AssetPathSource`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AssetPathTable {
    entries: BTreeMap<String, AssetPath>,
}

impl AssetPathTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from JSON (`{"heart": {"d": "...", "viewBox": [0,0,24,24]}}`).
    pub fn from_json_str(s: &str) -> FramewrightResult<Self> {
        let table: Self = serde_json::from_str(s)?;
        table.validate()?;
        Ok(table)
    }

    /// Read and validate a table file.
    pub fn from_path(path: &Path) -> FramewrightResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read asset table '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Register or replace path data for `key`.
    pub fn insert(&mut self, key: impl Into<String>, path: AssetPath) {
        self.entries.insert(key.into(), path);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every entry parses and has a usable view box.
    pub fn validate(&self) -> FramewrightResult<()> {
        for (key, path) in &self.entries {
            path.parse().map_err(|e| {
                FramewrightError::validation(format!("asset '{key}': {e}"))
            })?;
            let view = path.view_rect();
            if !(view.width() > 0.0 && view.height() > 0.0) {
                return Err(FramewrightError::validation(format!(
                    "asset '{key}' view box must have positive size"
                )));
            }
        }
        Ok(())
    }

    /// Registry asset shapes that have no entry in this table.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        asset_shape_keys()
            .filter(|key| !self.entries.contains_key(*key))
            .collect()
    }
}

impl AssetPathSource for AssetPathTable {
    fn path_data(&self, key: &str) -> Option<&AssetPath> {
        self.entries.get(key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/assets.rs"]
mod tests;
