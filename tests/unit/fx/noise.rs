use super::*;

#[test]
fn stays_in_range() {
    for i in 0..400 {
        let x = i as f64 * 0.37 - 50.0;
        let y = i as f64 * -0.71 + 13.0;
        let v = noise2d(5, "field", x, y);
        assert!((-1.0..=1.0).contains(&v), "({x}, {y}) -> {v}");
    }
}

#[test]
fn matches_lattice_at_integer_points() {
    assert_eq!(noise2d(5, "field", 3.0, -2.0), lattice(5, "field", 3, -2));
}

#[test]
fn is_continuous() {
    let eps = 1e-6;
    for i in 0..200 {
        let x = i as f64 * 0.05;
        let a = noise2d(9, "c", x, 1.5);
        let b = noise2d(9, "c", x + eps, 1.5);
        assert!((a - b).abs() < 1e-4, "jump at x={x}");
    }
    let left = noise2d(9, "c", 4.0 - 1e-9, 2.25);
    let right = noise2d(9, "c", 4.0, 2.25);
    assert!((left - right).abs() < 1e-6);
}

#[test]
fn deterministic_and_channel_keyed() {
    assert_eq!(noise2d(1, "a", 0.3, 0.8), noise2d(1, "a", 0.3, 0.8));
    assert_ne!(noise2d(1, "a", 0.3, 0.8), noise2d(1, "b", 0.3, 0.8));
    assert!(noise2d(1, "a", f64::NAN, f64::INFINITY).is_finite());
}
