use crate::{
    foundation::core::Frame,
    ratio::resolver::{RatioPolicy, export_scale, normalization_scale},
};

/// Export-space frame → normalized-space frame for `ratio_id`.
///
/// No rounding is applied; rotation is copied unchanged.
pub fn normalize_frame(frame: &Frame, ratio_id: &str) -> Frame {
    frame.scaled(normalization_scale(ratio_id))
}

/// Normalized-space frame → export-space frame for `ratio_id`.
pub fn denormalize_frame(frame: &Frame, ratio_id: &str) -> Frame {
    frame.scaled(export_scale(ratio_id))
}

/// [`normalize_frame`] over a batch, resolving the scale once.
pub fn normalize_frames(frames: &[Frame], ratio_id: &str) -> Vec<Frame> {
    normalize_frames_with(&RatioPolicy::DEFAULT, frames, ratio_id)
}

/// [`denormalize_frame`] over a batch, resolving the scale once.
pub fn denormalize_frames(frames: &[Frame], ratio_id: &str) -> Vec<Frame> {
    denormalize_frames_with(&RatioPolicy::DEFAULT, frames, ratio_id)
}

pub(crate) fn normalize_frames_with(
    policy: &RatioPolicy,
    frames: &[Frame],
    ratio_id: &str,
) -> Vec<Frame> {
    let scale = policy.normalization_scale(ratio_id);
    frames.iter().map(|f| f.scaled(scale)).collect()
}

pub(crate) fn denormalize_frames_with(
    policy: &RatioPolicy,
    frames: &[Frame],
    ratio_id: &str,
) -> Vec<Frame> {
    let scale = policy.export_scale(ratio_id);
    frames.iter().map(|f| f.scaled(scale)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/ratio/transform.rs"]
mod tests;
