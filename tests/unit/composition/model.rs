use super::*;
use crate::components::title::TitleCardProps;
use crate::foundation::core::FrameIndex;

fn json() -> serde_json::Value {
    serde_json::json!({
        "id": "map-video",
        "fps": { "num": 30, "den": 1 },
        "canvas": { "width": 1080, "height": 1920 },
        "seed": 7,
        "background": { "kind": "starfield", "props": { "count": 10 } },
        "scenes": [
            {
                "id": "intro",
                "duration_frames": 90,
                "component": { "kind": "title_card", "props": { "title": "map()" } },
                "transition_out": { "kind": "crossfade", "duration_frames": 30 }
            },
            {
                "id": "code",
                "duration_frames": 180,
                "component": { "kind": "code_editor", "props": { "code": "const a = [];" } }
            }
        ]
    })
}

#[test]
fn parses_and_lays_out_scenes() {
    let comp = Composition::from_reader(json().to_string().as_bytes()).unwrap();
    assert_eq!(comp.scenes.len(), 2);
    assert_eq!(comp.duration_frames().unwrap(), 240);
    let tl = comp.timeline().unwrap();
    assert_eq!(tl.windows()[1].start, FrameIndex(60));
}

#[test]
fn decl_reports_host_metadata() {
    let comp = Composition::from_reader(json().to_string().as_bytes()).unwrap();
    assert_eq!(
        comp.decl().unwrap(),
        CompositionDecl {
            id: "map-video".to_string(),
            duration_frames: 240,
            fps: Fps { num: 30, den: 1 },
            width: 1080,
            height: 1920,
        }
    );
}

#[test]
fn rejects_invalid_compositions() {
    let mutate = |f: &dyn Fn(&mut serde_json::Value)| {
        let mut v = json();
        f(&mut v);
        Composition::from_reader(v.to_string().as_bytes())
    };

    assert!(matches!(
        mutate(&|v| v["scenes"][0]["transition_out"]["duration_frames"] = 200.into()),
        Err(FramecastError::Validation(_))
    ));
    assert!(mutate(&|v| v["scenes"][1]["id"] = "intro".into()).is_err());
    assert!(mutate(&|v| v["scenes"] = serde_json::json!([])).is_err());
    assert!(mutate(&|v| v["canvas"]["width"] = 0.into()).is_err());
    assert!(mutate(&|v| v["fps"]["den"] = 0.into()).is_err());
    assert!(mutate(&|v| v["scenes"][1]["component"]["props"]["typing_speed"] = 0.into()).is_err());
    assert!(mutate(&|v| {
        v["scenes"][1]["transition_out"] =
            serde_json::json!({ "kind": "crossfade", "duration_frames": 10 })
    })
    .is_err());
}

#[test]
fn transition_errors_name_their_scene() {
    let mut v = json();
    v["scenes"][0]["transition_out"]["kind"] = "spin".into();
    let err = Composition::from_reader(v.to_string().as_bytes()).unwrap_err();
    assert!(matches!(err, FramecastError::Validation(_)));
    assert!(err.to_string().contains("scene 'intro'"), "{err}");
    assert!(err.to_string().contains("spin"), "{err}");
}

#[test]
fn malformed_json_is_a_serde_error() {
    assert!(matches!(
        Composition::from_reader("{ not json".as_bytes()),
        Err(FramecastError::Serde(_))
    ));
    let mut v = json();
    v["scenes"][0]["component"]["props"]["title_color"] = "#12".into();
    assert!(matches!(
        Composition::from_reader(v.to_string().as_bytes()),
        Err(FramecastError::Serde(_))
    ));
}

#[test]
fn missing_file_is_reported() {
    let err = Composition::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("not/here.json"), "{err}");
}

#[test]
fn zero_length_scenes_are_allowed_but_not_alone() {
    let scene = |id: &str, d| Scene {
        id: id.to_string(),
        duration_frames: d,
        component: ComponentSpec::TitleCard(TitleCardProps::new("t", "")),
        transition_out: None,
    };
    let mut comp = Composition::from_reader(json().to_string().as_bytes()).unwrap();
    comp.scenes.insert(1, scene("gap", 0));
    // The 30-frame transition can no longer reach into the empty scene.
    assert!(comp.validate().is_err());
    comp.scenes[0].transition_out = None;
    assert!(comp.validate().is_ok());
    assert_eq!(comp.duration_frames().unwrap(), 270);

    comp.scenes = vec![scene("empty", 0)];
    assert!(comp.validate().is_err());
}
