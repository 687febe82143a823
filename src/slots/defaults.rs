use crate::foundation::core::Frame;

/// Content kind of a template slot.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SlotType {
    /// Text block.
    Text,
    /// Image placeholder.
    Image,
    /// Call-to-action button.
    Button,
    /// Procedural or asset shape.
    Shape,
}

/// Percentage-of-canvas sizing rule with optional pixel clamps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSizeConfig {
    /// Width as a percentage of canvas width.
    pub width_percent: f64,
    /// Height as a percentage of canvas height.
    pub height_percent: f64,
    /// Lower bound on width.
    pub min_width: Option<f64>,
    /// Lower bound on height.
    pub min_height: Option<f64>,
    /// Upper bound on width.
    pub max_width: Option<f64>,
    /// Upper bound on height.
    pub max_height: Option<f64>,
}

impl SlotSizeConfig {
    const fn percent(width_percent: f64, height_percent: f64) -> Self {
        Self {
            width_percent,
            height_percent,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
        }
    }

    /// Compiled-in rule for `slot_type`.
    pub fn for_type(slot_type: SlotType) -> &'static Self {
        match slot_type {
            SlotType::Text => &TEXT_SIZE,
            SlotType::Image => &IMAGE_SIZE,
            SlotType::Button => &BUTTON_SIZE,
            SlotType::Shape => &SHAPE_SIZE,
        }
    }

    /// Width and height on a `canvas_width` x `canvas_height` canvas.
    ///
    /// Min clamps are applied before max clamps, so a max wins when both
    /// conflict.
    pub fn size_on(&self, canvas_width: f64, canvas_height: f64) -> (f64, f64) {
        let width = clamp_dim(
            canvas_width * self.width_percent / 100.0,
            self.min_width,
            self.max_width,
        );
        let height = clamp_dim(
            canvas_height * self.height_percent / 100.0,
            self.min_height,
            self.max_height,
        );
        (width, height)
    }
}

static TEXT_SIZE: SlotSizeConfig = SlotSizeConfig {
    min_width: Some(200.0),
    min_height: Some(40.0),
    ..SlotSizeConfig::percent(60.0, 15.0)
};

static IMAGE_SIZE: SlotSizeConfig = SlotSizeConfig {
    min_width: Some(100.0),
    min_height: Some(100.0),
    ..SlotSizeConfig::percent(40.0, 40.0)
};

static BUTTON_SIZE: SlotSizeConfig = SlotSizeConfig {
    min_width: Some(120.0),
    min_height: Some(40.0),
    max_height: Some(60.0),
    ..SlotSizeConfig::percent(30.0, 8.0)
};

static SHAPE_SIZE: SlotSizeConfig = SlotSizeConfig {
    min_width: Some(50.0),
    min_height: Some(50.0),
    ..SlotSizeConfig::percent(25.0, 25.0)
};

/// Role inferred from a slot's name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameRole {
    /// `headline`, `title`
    Headline,
    /// `subhead`, `subtitle`
    Subhead,
    /// `cta`, `button`
    CallToAction,
    /// `logo`
    Logo,
    /// `bg`, `background`
    Background,
    /// `subject`, `hero`
    Subject,
}

// Checked in order; the first role with a matching substring wins.
const NAME_PATTERNS: &[(NameRole, &[&str])] = &[
    (NameRole::Headline, &["headline", "title"]),
    (NameRole::Subhead, &["subhead", "subtitle"]),
    (NameRole::CallToAction, &["cta", "button"]),
    (NameRole::Logo, &["logo"]),
    (NameRole::Background, &["bg", "background"]),
    (NameRole::Subject, &["subject", "hero"]),
];

impl NameRole {
    /// Role for `name` (case-insensitive substring match), if any.
    pub fn detect(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        NAME_PATTERNS
            .iter()
            .find(|(_, needles)| needles.iter().any(|n| lower.contains(n)))
            .map(|(role, _)| *role)
    }
}

/// Centered default frame for a new slot, in the canvas's (normalized) space.
pub fn default_slot_frame(slot_type: SlotType, canvas_width: f64, canvas_height: f64) -> Frame {
    let (width, height) = SlotSizeConfig::for_type(slot_type).size_on(canvas_width, canvas_height);
    Frame::new(
        ((canvas_width - width) / 2.0).round(),
        ((canvas_height - height) / 2.0).round(),
        width.round(),
        height.round(),
    )
}

/// [`default_slot_frame`] adjusted by naming conventions.
///
/// Text roles keep their size and move vertically; logos and subjects get
/// their own size; backgrounds always cover the whole canvas.
pub fn default_slot_frame_by_name(
    name: &str,
    slot_type: SlotType,
    canvas_width: f64,
    canvas_height: f64,
) -> Frame {
    let base = default_slot_frame(slot_type, canvas_width, canvas_height);
    let Some(role) = NameRole::detect(name) else {
        return base;
    };
    tracing::debug!(slot = name, ?role, "slot name heuristic applied");

    match role {
        NameRole::Headline => Frame {
            y: band_y(0.2, base.height, canvas_height),
            ..base
        },
        NameRole::Subhead => Frame {
            y: band_y(0.35, base.height, canvas_height),
            ..base
        },
        NameRole::CallToAction => Frame {
            y: band_y(0.8, base.height, canvas_height),
            ..base
        },
        NameRole::Logo => {
            let side = (canvas_width.min(canvas_height) * 0.12).round();
            Frame::new(
                (canvas_width * 0.05).round(),
                (canvas_height * 0.05).round(),
                side,
                side,
            )
        }
        NameRole::Background => Frame::new(0.0, 0.0, canvas_width.round(), canvas_height.round()),
        NameRole::Subject => {
            let width = (canvas_width * 0.7).round();
            let height = (canvas_height * 0.6).round();
            Frame::new(
                ((canvas_width - width) / 2.0).round(),
                band_y(0.55, height, canvas_height),
                width,
                height,
            )
        }
    }
}

fn clamp_dim(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let value = min.map_or(value, |m| value.max(m));
    max.map_or(value, |m| value.min(m))
}

// Top edge that centers a box of `height` on `fraction` of the canvas height,
// kept inside the canvas.
fn band_y(fraction: f64, height: f64, canvas_height: f64) -> f64 {
    let limit = (canvas_height - height).max(0.0);
    (canvas_height * fraction - height / 2.0).clamp(0.0, limit).round()
}

#[cfg(test)]
#[path = "../../tests/unit/slots/defaults.rs"]
mod tests;
