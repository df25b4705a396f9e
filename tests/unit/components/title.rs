use super::*;
use crate::foundation::core::{Canvas, Fps};

fn ctx(frame: u64) -> RenderCtx {
    RenderCtx {
        frame: FrameIndex(frame),
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
        seed: 0,
    }
}

#[test]
fn title_springs_in_from_nothing() {
    let props = TitleCardProps::new("Array.prototype.map()", "How it really works");
    let first = props.render(&ctx(0)).unwrap();
    let title = first.element("title").unwrap();
    assert_eq!(title.opacity, 0.0);
    assert_eq!(title.scale, 0.0);
    assert!(first.background.is_none());

    let settled = props.render(&ctx(80)).unwrap();
    let title = settled.element("title").unwrap();
    assert!((title.opacity - 1.0).abs() < 0.01);
    assert!((title.scale - 1.0).abs() < 0.01);
}

#[test]
fn subtitle_waits_for_its_delay_then_slides_up() {
    let props = TitleCardProps::new("Title", "Subtitle");
    let early = props.render(&ctx(15)).unwrap();
    let sub = early.element("subtitle").unwrap();
    assert_eq!(sub.opacity, 0.0);
    assert_eq!(sub.translate, Vec2::new(0.0, 20.0));

    let late = props.render(&ctx(120)).unwrap();
    let sub = late.element("subtitle").unwrap();
    assert!(sub.translate.y.abs() < 0.2);
    assert!(sub.opacity > 0.99);
}

#[test]
fn empty_subtitle_is_omitted() {
    let props = TitleCardProps::new("Only a title", "");
    let v = props.render(&ctx(30)).unwrap();
    assert!(v.element("subtitle").is_none());
    assert_eq!(v.elements.len(), 1);
}

#[test]
fn title_props_parse_with_defaults() {
    let props: TitleCardProps =
        serde_json::from_value(serde_json::json!({ "title": "Hello" })).unwrap();
    assert_eq!(props, TitleCardProps::new("Hello", ""));
    assert!(props.validate().is_ok());

    let bad = TitleCardProps {
        spring: SpringConfig::new(0.0, 200.0, 0.5),
        ..TitleCardProps::new("x", "y")
    };
    assert!(bad.validate().is_err());
}

#[test]
fn gradient_title_uses_default_gradient() {
    let props: GradientTitleProps =
        serde_json::from_value(serde_json::json!({ "title": "Tailwind tips", "emoji": "🎨" }))
            .unwrap();
    assert_eq!(
        props.gradient_colors,
        [Color::rgb(0xff0080), Color::rgb(0x7928ca)]
    );
    assert_eq!(props.damping, 12.0);

    let v = props.render(&ctx(0)).unwrap();
    assert_eq!(
        v.background,
        Some(Fill::LinearGradient {
            angle_deg: 45.0,
            stops: vec![Color::rgb(0xff0080), Color::rgb(0x7928ca)],
        })
    );
    assert_eq!(v.element("emoji").unwrap().scale, 0.0);
    assert_eq!(v.element("title").unwrap().scale, 0.0);
}

#[test]
fn gradient_title_overshoots_then_settles() {
    let props = GradientTitleProps::new("Bounce");
    let peak = (1..40)
        .map(|f| props.render(&ctx(f)).unwrap().element("title").unwrap().scale)
        .fold(0.0, f64::max);
    assert!(peak > 1.0, "damping 12 should overshoot, peak={peak}");
    let rest = props.render(&ctx(200)).unwrap();
    assert!((rest.element("title").unwrap().scale - 1.0).abs() < 0.01);
}

#[test]
fn gradient_title_rejects_bad_props() {
    assert!(GradientTitleProps::new("  ").validate().is_err());
    let bad = GradientTitleProps {
        damping: -3.0,
        ..GradientTitleProps::new("ok")
    };
    assert!(bad.validate().is_err());
    assert!(
        serde_json::from_value::<GradientTitleProps>(
            serde_json::json!({ "title": "x", "gradient_colors": ["#zzz", "#fff"] })
        )
        .is_err()
    );
}
