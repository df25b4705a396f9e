use super::*;
use crate::foundation::core::{Canvas, Fps};

fn ctx(frame: u64) -> RenderCtx {
    RenderCtx {
        frame: FrameIndex(frame),
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 1080,
            height: 1920,
        },
        seed: 0,
    }
}

fn digits(v: &Visual) -> String {
    match &v.element("digits").unwrap().kind {
        ElementKind::Text { text, .. } => text.clone(),
        other => panic!("unexpected element {other:?}"),
    }
}

#[test]
fn counts_down_whole_seconds() {
    let props = CountdownProps::new(5, "Think!");
    assert_eq!(props.state(&ctx(0)).remaining_seconds, 5);
    assert_eq!(props.state(&ctx(1)).remaining_seconds, 5);
    assert_eq!(props.state(&ctx(30)).remaining_seconds, 4);
    assert_eq!(props.state(&ctx(149)).remaining_seconds, 1);
    assert_eq!(props.state(&ctx(150)).remaining_seconds, 0);
    assert_eq!(props.state(&ctx(400)).remaining_seconds, 0);
    assert_eq!(digits(&props.render(&ctx(45)).unwrap()), "4");
}

#[test]
fn ring_fills_with_elapsed_time() {
    let props = CountdownProps::new(2, "");
    let sweep = |f| match props.render(&ctx(f)).unwrap().element("ring_progress").unwrap().kind {
        ElementKind::Arc { sweep, .. } => sweep,
        ref other => panic!("unexpected element {other:?}"),
    };
    assert_eq!(sweep(0), 0.0);
    assert!((sweep(30) - 0.5).abs() < 1e-12);
    assert_eq!(sweep(60), 1.0);
    assert_eq!(sweep(90), 1.0);
}

#[test]
fn message_springs_up_and_ring_pulses() {
    let props = CountdownProps::new(3, "Find the bug");
    let first = props.render(&ctx(0)).unwrap();
    let msg = first.element("message").unwrap();
    assert_eq!(msg.opacity, 0.0);
    assert_eq!(msg.translate, Vec2::new(0.0, 30.0));
    assert_eq!(first.element("ring_track").unwrap().scale, 1.0);

    let later = props.render(&ctx(16)).unwrap();
    let scale = later.element("ring_track").unwrap().scale;
    assert!((scale - (1.6f64.sin() * 0.05 + 1.0)).abs() < 1e-12);
    assert!(later.element("message").unwrap().opacity > 0.5);
}

#[test]
fn rejects_zero_seconds() {
    assert!(CountdownProps::new(0, "x").validate().is_err());
    assert!(CountdownProps::new(10, "x").validate().is_ok());
}
