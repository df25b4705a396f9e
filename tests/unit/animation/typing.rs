use super::*;

#[test]
fn separator_costs_one_unit() {
    let text = "ab\ncd";
    let at = |f| visible_text(FrameIndex(f), FrameIndex(0), 1.0, text).unwrap();
    assert_eq!(at(0), "");
    assert_eq!(at(2), "ab");
    assert_eq!(at(3), "ab\n");
    assert_eq!(at(4), "ab\nc");
    assert_eq!(at(5), "ab\ncd");
    assert_eq!(at(50), "ab\ncd");
}

#[test]
fn fractional_speed_floors_the_budget() {
    let t = TypeOn::new(FrameIndex(0), 0.8).unwrap();
    assert_eq!(t.budget(FrameIndex(1)), 0);
    assert_eq!(t.budget(FrameIndex(2)), 1);
    assert_eq!(t.budget(FrameIndex(5)), 4);
    assert_eq!(t.visible_text(FrameIndex(5), "hello world"), "hell");
}

#[test]
fn start_offset_delays_typing() {
    let t = TypeOn::new(FrameIndex(30), 2.0).unwrap();
    assert_eq!(t.visible_text(FrameIndex(10), "abc"), "");
    assert_eq!(t.visible_text(FrameIndex(30), "abc"), "");
    assert_eq!(t.visible_text(FrameIndex(31), "abc"), "ab");
}

#[test]
fn never_splits_multibyte_characters() {
    let text = "héllo\nwörld ✓";
    let t = TypeOn::new(FrameIndex(0), 1.0).unwrap();
    for f in 0..20 {
        let v = t.visible_text(FrameIndex(f), text);
        assert!(text.starts_with(&v));
        assert_eq!(v.chars().count(), (f as usize).min(text.chars().count()));
    }
}

#[test]
fn typing_is_monotonic_and_bounded() {
    let text = "fn main() {\n    println!(\"hi\");\n}\n";
    let t = TypeOn::new(FrameIndex(3), 0.7).unwrap();
    let mut prev = String::new();
    for f in 0..200 {
        let v = t.visible_text(FrameIndex(f), text);
        assert!(v.starts_with(&prev), "frame {f} untyped text");
        assert!(v.len() <= text.len());
        prev = v;
    }
    assert_eq!(prev, text);
}

#[test]
fn rewinding_unreveals() {
    let t = TypeOn::new(FrameIndex(0), 1.0).unwrap();
    let late = t.visible_text(FrameIndex(8), "abcdefgh");
    let early = t.visible_text(FrameIndex(3), "abcdefgh");
    assert_eq!(late, "abcdefgh");
    assert_eq!(early, "abc");
    assert_eq!(t.visible_text(FrameIndex(8), "abcdefgh"), late);
}

#[test]
fn visible_lines_tracks_reached_lines() {
    let t = TypeOn::new(FrameIndex(0), 1.0).unwrap();
    assert_eq!(t.visible_lines(FrameIndex(0), "ab\ncd"), vec![""]);
    assert_eq!(t.visible_lines(FrameIndex(3), "ab\ncd"), vec!["ab", ""]);
    assert_eq!(t.visible_lines(FrameIndex(9), "ab\n\ncd"), vec!["ab", "", "cd"]);
}

#[test]
fn frames_to_complete_rounds_up() {
    let t = TypeOn::new(FrameIndex(0), 0.5).unwrap();
    assert_eq!(t.frames_to_complete("abc"), 6);
    let t = TypeOn::new(FrameIndex(0), 2.0).unwrap();
    assert_eq!(t.frames_to_complete("abc"), 2);
    let at = t.start.0 + t.frames_to_complete("abcd");
    assert_eq!(t.visible_text(FrameIndex(at), "abcd"), "abcd");
}

#[test]
fn frames_to_complete_matches_the_reveal_at_fractional_speeds() {
    for k in 1..=300u32 {
        let cpf = f64::from(k) / 100.0;
        let t = TypeOn::new(FrameIndex(7), cpf).unwrap();
        for len in [1usize, 29, 58, 63, 116, 232, 400] {
            let text = "x".repeat(len);
            let n = t.frames_to_complete(&text);
            let done = FrameIndex(t.start.0 + n);
            assert_eq!(t.visible_text(done, &text), text, "cpf={cpf} len={len}");
            assert_ne!(
                t.visible_text(FrameIndex(done.0 - 1), &text),
                text,
                "cpf={cpf} len={len} completes earlier"
            );
        }
    }
    let t = TypeOn::new(FrameIndex(0), 0.29).unwrap();
    let text = "y".repeat(29);
    assert_eq!(t.frames_to_complete(&text), 101);
}

#[test]
fn rejects_invalid_speeds() {
    assert!(TypeOn::new(FrameIndex(0), 0.0).is_err());
    assert!(TypeOn::new(FrameIndex(0), -1.0).is_err());
    assert!(TypeOn::new(FrameIndex(0), f64::NAN).is_err());
    assert!(visible_text(FrameIndex(1), FrameIndex(0), f64::INFINITY, "x").is_err());
}
