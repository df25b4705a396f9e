use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn frame_since_saturates_before_start() {
    assert_eq!(FrameIndex(3).since(FrameIndex(10)), 0);
    assert_eq!(FrameIndex(12).since(FrameIndex(10)), 2);
}

#[test]
fn opacity_scales_premultiplied_channels() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 255);
    assert_eq!(c.with_opacity(1.0), c);
    assert_eq!(c.with_opacity(0.0), Rgba8Premul::transparent());
    let half = c.with_opacity(0.5);
    assert_eq!(half.a, 128);
    assert_eq!(half.r, 128);
}

#[test]
fn canvas_fraction_maps_to_pixels() {
    let canvas = Canvas {
        width: 1080,
        height: 1920,
    };
    assert_eq!(canvas.center(), Vec2::new(540.0, 960.0));
    assert_eq!(canvas.at_fraction(0.5, 0.25), Vec2::new(540.0, 480.0));
}
