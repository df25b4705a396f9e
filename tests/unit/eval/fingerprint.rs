use super::*;
use crate::components::visual::{Element, ElementKind, Visual};
use crate::eval::evaluator::{Layer, LayerRole};
use crate::foundation::core::{FrameIndex, Vec2};
use crate::theme::color::Color;

fn desc(opacity: f64) -> FrameDescription {
    let mut visual = Visual::default();
    visual.push(
        Element::new(
            "title",
            ElementKind::Text {
                text: "hi".to_string(),
                font_size: 40.0,
                color: Color::WHITE,
            },
            Vec2::new(10.0, 20.0),
        )
        .with_opacity(opacity),
    );
    FrameDescription {
        frame: FrameIndex(3),
        layers: vec![Layer {
            scene_id: Some("intro".to_string()),
            role: LayerRole::Scene,
            local_frame: FrameIndex(3),
            weight: 1.0,
            transition: None,
            visual,
        }],
    }
}

#[test]
fn equal_descriptions_hash_equal() {
    assert_eq!(
        fingerprint_frame(&desc(0.5)).unwrap(),
        fingerprint_frame(&desc(0.5)).unwrap()
    );
}

#[test]
fn any_change_changes_the_hash() {
    let base = fingerprint_frame(&desc(0.5)).unwrap();
    assert_ne!(base, fingerprint_frame(&desc(0.50001)).unwrap());
    let mut moved = desc(0.5);
    moved.frame = FrameIndex(4);
    assert_ne!(base, fingerprint_frame(&moved).unwrap());
}

#[test]
fn displays_as_32_hex_digits() {
    let fp = FrameFingerprint { hi: 1, lo: 0xab };
    assert_eq!(fp.to_string(), "000000000000000100000000000000ab");
}
