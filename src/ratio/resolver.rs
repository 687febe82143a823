use std::sync::LazyLock;

use regex_lite::Regex;

use crate::foundation::core::{Dimensions, ScaleFactor};

// `WxH` is a literal pixel size, `W:H` an aspect ratio.
static RATIO_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)([x:])(\d+)$").ok());

/// Parsed form of a ratio identifier.
///
/// Parsing never fails: anything that is not an exact `WxH` / `W:H` match
/// (including zero or out-of-range components) is [`RatioSpec::Unrecognized`],
/// and the caller decides which default applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatioSpec {
    /// Literal export size in pixels (`"728x90"`).
    Literal { w: u32, h: u32 },
    /// Aspect ratio (`"16:9"`).
    Aspect { w: u32, h: u32 },
    /// Anything else.
    Unrecognized,
}

impl RatioSpec {
    /// Classify a ratio identifier.
    pub fn parse(id: &str) -> Self {
        let Some(caps) = RATIO_RE.as_ref().and_then(|re| re.captures(id)) else {
            tracing::debug!(ratio = id, "unrecognized ratio identifier");
            return Self::Unrecognized;
        };
        let w = caps[1].parse::<u32>().ok().filter(|v| *v > 0);
        let h = caps[3].parse::<u32>().ok().filter(|v| *v > 0);
        match (w, h, &caps[2]) {
            (Some(w), Some(h), "x") => Self::Literal { w, h },
            (Some(w), Some(h), _) => Self::Aspect { w, h },
            _ => {
                tracing::debug!(ratio = id, "ratio identifier has zero or oversized component");
                Self::Unrecognized
            }
        }
    }

    /// Width over height, or `None` for unrecognized identifiers.
    pub fn aspect(self) -> Option<f64> {
        match self {
            Self::Literal { w, h } | Self::Aspect { w, h } => Some(f64::from(w) / f64::from(h)),
            Self::Unrecognized => None,
        }
    }
}

/// Constants driving export and normalized canvas sizes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RatioPolicy {
    /// Target long edge of the normalized authoring canvas.
    pub long_edge: u32,
    /// Minimum short edge of the normalized canvas.
    pub min_short_edge: u32,
    /// Lower bound applied to the aspect before dividing by it.
    pub aspect_floor: f64,
    /// Export side length for square aspect ratios.
    pub square_export: u32,
    /// Export width for landscape aspect ratios.
    pub landscape_export_width: u32,
    /// Export width for portrait aspect ratios.
    pub portrait_export_width: u32,
}

impl RatioPolicy {
    /// The built-in policy used by the free functions in this module.
    pub const DEFAULT: Self = Self {
        long_edge: 2000,
        min_short_edge: 320,
        aspect_floor: 0.0001,
        square_export: 1080,
        landscape_export_width: 1920,
        portrait_export_width: 1080,
    };

    /// Literal output size for `id`.
    pub fn export_dimensions(&self, id: &str) -> Dimensions {
        match RatioSpec::parse(id) {
            RatioSpec::Literal { w, h } => Dimensions::new(w, h),
            RatioSpec::Aspect { w, h } if w == h => {
                Dimensions::new(self.square_export, self.square_export)
            }
            RatioSpec::Aspect { w, h } => {
                let base = if w > h {
                    self.landscape_export_width
                } else {
                    self.portrait_export_width
                };
                let height = f64::from(base) * f64::from(h) / f64::from(w);
                Dimensions::new(base, to_px(height))
            }
            RatioSpec::Unrecognized => Dimensions::new(self.square_export, self.square_export),
        }
    }

    /// Fixed-budget authoring canvas for `id`, independent of export size.
    pub fn normalized_dimensions(&self, id: &str) -> Dimensions {
        let aspect = parse_aspect_ratio(id).max(self.aspect_floor);
        let long_edge = f64::from(self.long_edge);
        let min_short = f64::from(self.min_short_edge);

        let (w, h) = if aspect >= 1.0 {
            let h = (long_edge / aspect).round();
            if h < min_short {
                (min_short * aspect, min_short)
            } else {
                (long_edge, h)
            }
        } else {
            let w = (long_edge * aspect).round();
            if w < min_short {
                (min_short, min_short / aspect)
            } else {
                (w, long_edge)
            }
        };
        Dimensions::new(to_px(w), to_px(h))
    }

    /// Normalized → export factor, `export / normalized` per axis.
    pub fn export_scale(&self, id: &str) -> ScaleFactor {
        ScaleFactor::between(self.normalized_dimensions(id), self.export_dimensions(id))
    }

    /// Export → normalized factor, `normalized / export` per axis.
    ///
    /// Computed from fresh dimensions rather than by inverting
    /// [`RatioPolicy::export_scale`].
    pub fn normalization_scale(&self, id: &str) -> ScaleFactor {
        ScaleFactor::between(self.export_dimensions(id), self.normalized_dimensions(id))
    }

    /// All spaces for `id` in one pass.
    pub fn resolve(&self, id: &str) -> RatioSpaces {
        RatioSpaces {
            ratio: id.to_string(),
            export: self.export_dimensions(id),
            normalized: self.normalized_dimensions(id),
            export_scale: self.export_scale(id),
            normalization_scale: self.normalization_scale(id),
        }
    }
}

impl Default for RatioPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolved coordinate spaces for one ratio identifier.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioSpaces {
    /// Identifier these spaces were resolved from.
    pub ratio: String,
    /// Literal output size.
    pub export: Dimensions,
    /// Authoring canvas size.
    pub normalized: Dimensions,
    /// Normalized → export.
    pub export_scale: ScaleFactor,
    /// Export → normalized.
    pub normalization_scale: ScaleFactor,
}

/// Width/height ratio of `id`; unrecognized identifiers are square.
pub fn parse_aspect_ratio(id: &str) -> f64 {
    RatioSpec::parse(id).aspect().unwrap_or(1.0)
}

/// Literal export size for `id` under [`RatioPolicy::DEFAULT`].
pub fn export_dimensions(id: &str) -> Dimensions {
    RatioPolicy::DEFAULT.export_dimensions(id)
}

/// Normalized authoring size for `id` under [`RatioPolicy::DEFAULT`].
pub fn normalized_dimensions(id: &str) -> Dimensions {
    RatioPolicy::DEFAULT.normalized_dimensions(id)
}

/// Normalized → export factor under [`RatioPolicy::DEFAULT`].
pub fn export_scale(id: &str) -> ScaleFactor {
    RatioPolicy::DEFAULT.export_scale(id)
}

/// Export → normalized factor under [`RatioPolicy::DEFAULT`].
pub fn normalization_scale(id: &str) -> ScaleFactor {
    RatioPolicy::DEFAULT.normalization_scale(id)
}

/// Every space for `id` under [`RatioPolicy::DEFAULT`].
pub fn resolve_spaces(id: &str) -> RatioSpaces {
    RatioPolicy::DEFAULT.resolve(id)
}

fn to_px(v: f64) -> u32 {
    // NaN saturates to 0 under `as`.
    (v.round() as u32).max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/ratio/resolver.rs"]
mod tests;
