use super::*;

#[test]
fn button_height_hits_max_clamp() {
    assert_eq!(
        default_slot_frame(SlotType::Button, 1000.0, 1000.0),
        Frame::new(350.0, 470.0, 300.0, 60.0)
    );
}

#[test]
fn text_is_centered_percentage_box() {
    assert_eq!(
        default_slot_frame(SlotType::Text, 1000.0, 1000.0),
        Frame::new(200.0, 425.0, 600.0, 150.0)
    );
}

#[test]
fn min_clamps_apply_on_small_canvases() {
    assert_eq!(
        default_slot_frame(SlotType::Text, 200.0, 100.0),
        Frame::new(0.0, 30.0, 200.0, 40.0)
    );
}

#[test]
fn min_before_max_lets_max_win() {
    let cfg = SlotSizeConfig {
        min_height: Some(80.0),
        max_height: Some(50.0),
        ..SlotSizeConfig::percent(10.0, 1.0)
    };
    assert_eq!(cfg.size_on(1000.0, 1000.0), (100.0, 50.0));
}

#[test]
fn outputs_are_whole_pixels() {
    let f = default_slot_frame(SlotType::Image, 2000.0, 1125.0);
    assert_eq!(f, Frame::new(600.0, 338.0, 800.0, 450.0));
    let f = default_slot_frame(SlotType::Shape, 333.0, 777.0);
    for v in [f.x, f.y, f.width, f.height] {
        assert_eq!(v, v.round());
    }
}

#[test]
fn name_roles_follow_priority_order() {
    assert_eq!(NameRole::detect("Main Headline"), Some(NameRole::Headline));
    assert_eq!(NameRole::detect("SUBHEAD"), Some(NameRole::Subhead));
    // "title" is checked before "subtitle".
    assert_eq!(NameRole::detect("subtitle"), Some(NameRole::Headline));
    assert_eq!(NameRole::detect("cta-primary"), Some(NameRole::CallToAction));
    assert_eq!(NameRole::detect("logo_bg"), Some(NameRole::Logo));
    assert_eq!(NameRole::detect("hero_bg"), Some(NameRole::Background));
    assert_eq!(NameRole::detect("Hero shot"), Some(NameRole::Subject));
    assert_eq!(NameRole::detect("caption"), None);
}

#[test]
fn headline_moves_up_keeping_size() {
    assert_eq!(
        default_slot_frame_by_name("Headline", SlotType::Text, 1000.0, 1000.0),
        Frame::new(200.0, 125.0, 600.0, 150.0)
    );
}

#[test]
fn cta_sits_near_bottom() {
    assert_eq!(
        default_slot_frame_by_name("CTA", SlotType::Button, 1000.0, 1000.0),
        Frame::new(350.0, 770.0, 300.0, 60.0)
    );
}

#[test]
fn band_stays_inside_short_canvas() {
    let f = default_slot_frame_by_name("button", SlotType::Button, 400.0, 50.0);
    assert_eq!(f.height, 40.0);
    assert_eq!(f.y, 10.0);
}

#[test]
fn logo_gets_its_own_size() {
    assert_eq!(
        default_slot_frame_by_name("Brand Logo", SlotType::Image, 1000.0, 500.0),
        Frame::new(50.0, 25.0, 60.0, 60.0)
    );
}

#[test]
fn background_fills_canvas_for_any_type() {
    for ty in [SlotType::Text, SlotType::Image, SlotType::Button, SlotType::Shape] {
        assert_eq!(
            default_slot_frame_by_name("Background", ty, 2000.0, 1125.0),
            Frame::new(0.0, 0.0, 2000.0, 1125.0)
        );
    }
}

#[test]
fn subject_is_large_and_centered() {
    assert_eq!(
        default_slot_frame_by_name("subject", SlotType::Image, 1000.0, 1000.0),
        Frame::new(150.0, 250.0, 700.0, 600.0)
    );
}

#[test]
fn unmatched_names_keep_base_frame() {
    assert_eq!(
        default_slot_frame_by_name("caption", SlotType::Text, 1000.0, 1000.0),
        default_slot_frame(SlotType::Text, 1000.0, 1000.0)
    );
}

#[test]
fn slot_type_json_is_lowercase() {
    assert_eq!(serde_json::to_string(&SlotType::Button).unwrap(), r#""button""#);
    let t: SlotType = serde_json::from_str(r#""image""#).unwrap();
    assert_eq!(t, SlotType::Image);
}
