use super::*;

const IDS: &[&str] = &["1:1", "16:9", "9:16", "1:20", "728x90", "160x600", "nonsense"];

fn assert_close(a: &Frame, b: &Frame) {
    assert!((a.x - b.x).abs() < 1e-9, "{a:?} vs {b:?}");
    assert!((a.y - b.y).abs() < 1e-9, "{a:?} vs {b:?}");
    assert!((a.width - b.width).abs() < 1e-9, "{a:?} vs {b:?}");
    assert!((a.height - b.height).abs() < 1e-9, "{a:?} vs {b:?}");
    assert_eq!(a.rotation, b.rotation);
}

#[test]
fn round_trip_restores_frame() {
    let frames = [
        Frame::new(0.0, 0.0, 100.0, 100.0),
        Frame::new(12.5, 733.25, 41.0, 9.75).with_rotation(-30.0),
        Frame::new(-50.0, 1e4, 0.0, 1.0).with_rotation(359.9),
    ];
    for id in IDS {
        for f in &frames {
            let back = denormalize_frame(&normalize_frame(f, id), id);
            assert_close(&back, f);
            let back = normalize_frame(&denormalize_frame(f, id), id);
            assert_close(&back, f);
        }
    }
}

#[test]
fn rotation_passes_through_both_directions() {
    let f = Frame::new(10.0, 10.0, 10.0, 10.0).with_rotation(17.5);
    assert_eq!(normalize_frame(&f, "16:9").rotation, Some(17.5));
    assert_eq!(denormalize_frame(&f, "16:9").rotation, Some(17.5));
    assert_eq!(normalize_frame(&Frame::new(0.0, 0.0, 1.0, 1.0), "16:9").rotation, None);
}

#[test]
fn denormalize_fills_export_canvas() {
    let full = Frame::new(0.0, 0.0, 2000.0, 1125.0);
    let out = denormalize_frame(&full, "16:9");
    assert_close(&out, &Frame::new(0.0, 0.0, 1920.0, 1080.0));
}

#[test]
fn normalize_uses_per_axis_factors() {
    // 728x90 -> normalized 2588x320
    let f = Frame::new(364.0, 45.0, 728.0, 90.0);
    let out = normalize_frame(&f, "728x90");
    assert_close(&out, &Frame::new(1294.0, 160.0, 2588.0, 320.0));
}

#[test]
fn batch_helpers_match_single_frame_calls() {
    let frames = vec![
        Frame::new(1.0, 2.0, 3.0, 4.0),
        Frame::new(5.0, 6.0, 7.0, 8.0).with_rotation(90.0),
    ];
    let n = normalize_frames(&frames, "4:5");
    let d = denormalize_frames(&frames, "4:5");
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(n[i], normalize_frame(f, "4:5"));
        assert_eq!(d[i], denormalize_frame(f, "4:5"));
    }
}
