use super::*;

const IDS: &[&str] = &[
    "1:1", "16:9", "9:16", "4:5", "3:2", "1:20", "20:1", "728x90", "300x250", "160x600",
    "1080x1080", "garbage", "", "16/9", "0:5", "7x0",
];

#[test]
fn parse_classifies_both_patterns() {
    assert_eq!(RatioSpec::parse("728x90"), RatioSpec::Literal { w: 728, h: 90 });
    assert_eq!(RatioSpec::parse("16:9"), RatioSpec::Aspect { w: 16, h: 9 });
    assert_eq!(RatioSpec::parse("16 : 9"), RatioSpec::Unrecognized);
    assert_eq!(RatioSpec::parse("16:9:1"), RatioSpec::Unrecognized);
    assert_eq!(RatioSpec::parse("-4:3"), RatioSpec::Unrecognized);
    assert_eq!(RatioSpec::parse("0:9"), RatioSpec::Unrecognized);
    assert_eq!(RatioSpec::parse("99999999999x1"), RatioSpec::Unrecognized);
}

#[test]
fn unrecognized_ids_are_square() {
    for id in ["", "wide", "16/9", "1.5:1", "x", "0x0"] {
        assert_eq!(parse_aspect_ratio(id), 1.0, "{id}");
        assert_eq!(export_dimensions(id), Dimensions::new(1080, 1080), "{id}");
        assert_eq!(normalized_dimensions(id), Dimensions::new(2000, 2000), "{id}");
    }
}

#[test]
fn literal_ids_export_verbatim() {
    for (w, h) in [(728, 90), (300, 250), (160, 600), (1, 1), (4096, 17)] {
        let id = format!("{w}x{h}");
        assert_eq!(export_dimensions(&id), Dimensions::new(w, h));
    }
}

#[test]
fn square_aspects_export_at_1080() {
    for n in [1, 2, 7, 1000] {
        assert_eq!(export_dimensions(&format!("{n}:{n}")), Dimensions::new(1080, 1080));
    }
}

#[test]
fn aspect_exports_fix_width_by_orientation() {
    assert_eq!(export_dimensions("16:9"), Dimensions::new(1920, 1080));
    assert_eq!(export_dimensions("3:2"), Dimensions::new(1920, 1280));
    assert_eq!(export_dimensions("9:16"), Dimensions::new(1080, 1920));
    assert_eq!(export_dimensions("4:5"), Dimensions::new(1080, 1350));
    // 1920 * 1 / 3 = 640
    assert_eq!(export_dimensions("3:1"), Dimensions::new(1920, 640));
}

#[test]
fn normalized_landscape_keeps_long_edge() {
    assert_eq!(normalized_dimensions("16:9"), Dimensions::new(2000, 1125));
    assert_eq!(normalized_dimensions("1:1"), Dimensions::new(2000, 2000));
}

#[test]
fn normalized_portrait_keeps_long_edge() {
    assert_eq!(normalized_dimensions("9:16"), Dimensions::new(1125, 2000));
    assert_eq!(normalized_dimensions("4:5"), Dimensions::new(1600, 2000));
}

#[test]
fn normalized_extreme_ratios_clamp_short_edge() {
    assert_eq!(normalized_dimensions("1:20"), Dimensions::new(320, 6400));
    assert_eq!(normalized_dimensions("20:1"), Dimensions::new(6400, 320));
    // 728/90 -> 2000/8.09 = 247 < 320
    assert_eq!(normalized_dimensions("728x90"), Dimensions::new(2588, 320));
}

#[test]
fn scales_are_reciprocal() {
    for id in IDS {
        let e = export_scale(id);
        let n = normalization_scale(id);
        assert!(e.scale_x > 0.0 && e.scale_y > 0.0, "{id}");
        assert!((e.scale_x * n.scale_x - 1.0).abs() < 1e-9, "{id}");
        assert!((e.scale_y * n.scale_y - 1.0).abs() < 1e-9, "{id}");
    }
}

#[test]
fn export_scale_maps_normalized_onto_export() {
    let s = export_scale("16:9");
    assert!((s.scale_x - 1920.0 / 2000.0).abs() < 1e-12);
    assert!((s.scale_y - 1080.0 / 1125.0).abs() < 1e-12);
}

#[test]
fn custom_policy_changes_budget() {
    let policy = RatioPolicy {
        long_edge: 1600,
        min_short_edge: 100,
        ..RatioPolicy::default()
    };
    assert_eq!(policy.normalized_dimensions("16:9"), Dimensions::new(1600, 900));
    assert_eq!(policy.normalized_dimensions("1:20"), Dimensions::new(100, 2000));
}

#[test]
fn resolve_bundles_every_space() {
    let spaces = resolve_spaces("9:16");
    assert_eq!(spaces.ratio, "9:16");
    assert_eq!(spaces.export, Dimensions::new(1080, 1920));
    assert_eq!(spaces.normalized, Dimensions::new(1125, 2000));
    assert_eq!(spaces.export_scale, export_scale("9:16"));
    assert_eq!(spaces.normalization_scale, normalization_scale("9:16"));
}

#[test]
fn policy_deserializes_partial_json() {
    let p: RatioPolicy = serde_json::from_str(r#"{"longEdge":4000}"#).unwrap();
    assert_eq!(p.long_edge, 4000);
    assert_eq!(p.min_short_edge, 320);
}
