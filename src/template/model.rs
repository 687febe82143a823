use std::{collections::BTreeSet, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::{
        core::{Dimensions, Frame},
        error::{FramewrightError, FramewrightResult},
    },
    ratio::{
        resolver::{RatioPolicy, RatioSpaces},
        transform::{denormalize_frames_with, normalize_frames_with},
    },
    shapes::{
        descriptor::ShapeDescriptor,
        registry::{ShapeOptions, shape_definition},
    },
    slots::defaults::{SlotType, default_slot_frame_by_name},
};

/// A design template: a ratio identifier plus placed slots.
///
/// Slot frames are authored in the normalized space of [`Template::ratio`];
/// [`Template::to_export_space`] produces a copy in export pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Template {
    /// Ratio identifier (`"16:9"`, `"728x90"`); malformed values render as 1:1.
    pub ratio: String,
    /// Placed slots, back to front.
    #[serde(default)]
    pub slots: Vec<Slot>,
}

/// One placeholder region of a template.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    /// Identifier, unique within a template.
    pub id: String,
    /// Author-facing name; drives placement heuristics.
    pub name: String,
    /// Content kind.
    #[serde(rename = "type")]
    pub slot_type: SlotType,
    /// Position, size and rotation.
    #[serde(flatten)]
    pub frame: Frame,
    /// Shape reference for shape slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<SlotShape>,
}

/// Shape id plus live options (`shape.options`).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlotShape {
    /// Registry id (`star`, `flowchart/process`, ...).
    pub kind: String,
    /// Per-instance overrides of the registry defaults.
    #[serde(default)]
    pub options: ShapeOptions,
}

impl Slot {
    /// Geometry for this slot's shape at its current width/height.
    ///
    /// `None` when the slot has no shape or references an unknown id.
    pub fn shape_descriptor(&self) -> Option<ShapeDescriptor> {
        let shape = self.shape.as_ref()?;
        shape_definition(&shape.kind)
            .map(|def| def.geometry(self.frame.width, self.frame.height, Some(&shape.options)))
    }
}

impl Template {
    /// Empty template for `ratio`.
    pub fn new(ratio: impl Into<String>) -> Self {
        Self {
            ratio: ratio.into(),
            slots: Vec::new(),
        }
    }

    /// Parse a template from JSON.
    pub fn from_json_str(s: &str) -> FramewrightResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a template JSON file.
    pub fn from_path(path: &Path) -> FramewrightResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read template '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Pretty JSON for this template.
    pub fn to_json_pretty(&self) -> FramewrightResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check slot ids, frame values and shape references.
    pub fn validate(&self) -> FramewrightResult<()> {
        let mut ids = BTreeSet::new();
        for slot in &self.slots {
            if slot.id.trim().is_empty() {
                return Err(FramewrightError::validation("slot id must be non-empty"));
            }
            if !ids.insert(slot.id.as_str()) {
                return Err(FramewrightError::validation(format!(
                    "duplicate slot id '{}'",
                    slot.id
                )));
            }
            if !slot.frame.is_finite() {
                return Err(FramewrightError::validation(format!(
                    "slot '{}' has non-finite frame values",
                    slot.id
                )));
            }
            if slot.frame.width < 0.0 || slot.frame.height < 0.0 {
                return Err(FramewrightError::validation(format!(
                    "slot '{}' has negative size",
                    slot.id
                )));
            }
            if let Some(shape) = &slot.shape
                && shape_definition(&shape.kind).is_none()
            {
                return Err(FramewrightError::validation(format!(
                    "slot '{}' references unknown shape '{}'",
                    slot.id, shape.kind
                )));
            }
        }
        Ok(())
    }

    /// Coordinate spaces for this template's ratio.
    pub fn spaces(&self) -> RatioSpaces {
        RatioPolicy::DEFAULT.resolve(&self.ratio)
    }

    /// Size of the normalized authoring canvas.
    pub fn normalized_dimensions(&self) -> Dimensions {
        RatioPolicy::DEFAULT.normalized_dimensions(&self.ratio)
    }

    /// Slot by id.
    pub fn slot(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Append a slot placed with the default-frame heuristics on the
    /// normalized canvas.
    #[tracing::instrument(skip(self), fields(ratio = %self.ratio))]
    pub fn add_slot(
        &mut self,
        id: &str,
        name: &str,
        slot_type: SlotType,
    ) -> FramewrightResult<&Slot> {
        if self.slot(id).is_some() {
            return Err(FramewrightError::validation(format!(
                "duplicate slot id '{id}'"
            )));
        }
        let canvas = self.normalized_dimensions();
        let frame = default_slot_frame_by_name(
            name,
            slot_type,
            f64::from(canvas.w),
            f64::from(canvas.h),
        );
        self.slots.push(Slot {
            id: id.to_string(),
            name: name.to_string(),
            slot_type,
            frame,
            shape: None,
        });
        let idx = self.slots.len() - 1;
        Ok(&self.slots[idx])
    }

    /// Copy with every frame mapped from normalized to export space.
    #[tracing::instrument(skip(self), fields(ratio = %self.ratio, slots = self.slots.len()))]
    pub fn to_export_space(&self) -> Self {
        self.map_frames(denormalize_frames_with)
    }

    /// Copy with every frame mapped from export to normalized space.
    #[tracing::instrument(skip(self), fields(ratio = %self.ratio, slots = self.slots.len()))]
    pub fn to_normalized_space(&self) -> Self {
        self.map_frames(normalize_frames_with)
    }

    /// Copy with every frame rounded to whole pixels.
    pub fn snapped(&self) -> Self {
        let mut out = self.clone();
        for slot in &mut out.slots {
            slot.frame = slot.frame.snapped();
        }
        out
    }

    fn map_frames(&self, f: fn(&RatioPolicy, &[Frame], &str) -> Vec<Frame>) -> Self {
        let frames: Vec<Frame> = self.slots.iter().map(|s| s.frame).collect();
        let mapped = f(&RatioPolicy::DEFAULT, &frames, &self.ratio);
        let mut out = self.clone();
        for (slot, frame) in out.slots.iter_mut().zip(mapped) {
            slot.frame = frame;
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/model.rs"]
mod tests;
