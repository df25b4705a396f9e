use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn rest_value_at_and_before_start() {
    let s = Spring::unit(SpringConfig::default()).between(20.0, 0.0);
    assert_eq!(s.value(FrameIndex(0), FrameIndex(15), fps30()), 20.0);
    assert_eq!(s.value(FrameIndex(15), FrameIndex(15), fps30()), 20.0);
    assert_ne!(s.value(FrameIndex(16), FrameIndex(15), fps30()), 20.0);
}

#[test]
fn critically_damped_converges_without_overshoot() {
    let cfg = SpringConfig::new(20.0, 100.0, 1.0);
    assert!((cfg.damping_ratio() - 1.0).abs() < 1e-12);
    let mut prev = 0.0;
    for f in 0..400u64 {
        let p = spring(FrameIndex(f), FrameIndex(0), fps30(), cfg);
        assert!(p >= prev - 1e-12, "frame {f} went backwards");
        assert!(p <= 1.0 + 1e-12);
        prev = p;
    }
    assert!((prev - 1.0).abs() < 1e-6);
}

#[test]
fn overdamped_converges_monotonically() {
    let cfg = SpringConfig::new(100.0, 200.0, 0.5);
    assert!(cfg.damping_ratio() > 1.0);
    let mut prev = 0.0;
    for f in 0..2000u64 {
        let p = spring(FrameIndex(f), FrameIndex(0), fps30(), cfg);
        assert!(p.is_finite());
        assert!(p >= prev - 1e-12);
        assert!(p <= 1.0 + 1e-12);
        prev = p;
    }
    assert!((prev - 1.0).abs() < 1e-3);
}

#[test]
fn far_future_overdamped_stays_finite() {
    let cfg = SpringConfig::new(100.0, 200.0, 0.5);
    let p = spring(FrameIndex(1_000_000), FrameIndex(0), fps30(), cfg);
    assert!(p.is_finite());
    assert!((p - 1.0).abs() < 1e-9);
}

#[test]
fn underdamped_overshoots_then_settles() {
    let cfg = SpringConfig::default();
    let peak = (0..120u64)
        .map(|f| spring(FrameIndex(f), FrameIndex(0), fps30(), cfg))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
    let late = spring(FrameIndex(600), FrameIndex(0), fps30(), cfg);
    assert!((late - 1.0).abs() < 1e-6);
}

#[test]
fn overshoot_clamping_caps_progress() {
    let cfg = SpringConfig {
        overshoot_clamping: true,
        ..SpringConfig::default()
    };
    for f in 0..120u64 {
        assert!(spring(FrameIndex(f), FrameIndex(0), fps30(), cfg) <= 1.0);
    }
}

#[test]
fn measure_spring_matches_rest_threshold() {
    let cfg = SpringConfig::default();
    let n = measure_spring(fps30(), &cfg, DEFAULT_REST_THRESHOLD).unwrap();
    assert!(n > 1);
    let before = spring(FrameIndex(n - 1), FrameIndex(0), fps30(), cfg);
    assert!((before - 1.0).abs() >= DEFAULT_REST_THRESHOLD);
    for f in n..n + 600 {
        let p = spring(FrameIndex(f), FrameIndex(0), fps30(), cfg);
        assert!((p - 1.0).abs() < DEFAULT_REST_THRESHOLD, "frame {f}");
    }
}

#[test]
fn measure_spring_rejects_bad_inputs() {
    assert!(measure_spring(fps30(), &SpringConfig::default(), 0.0).is_err());
    assert!(measure_spring(fps30(), &SpringConfig::new(10.0, 100.0, 0.0), 0.01).is_err());
}

#[test]
fn stretched_spring_settles_at_requested_duration() {
    let s = Spring::unit(SpringConfig::with_damping(200.0)).stretched_to(30);
    let start = FrameIndex(10);
    assert_eq!(s.progress(FrameIndex(10), start, fps30()), 0.0);
    let mid = s.progress(FrameIndex(25), start, fps30());
    assert!(mid > 0.0 && mid < 1.0);
    let end = s.progress(FrameIndex(40), start, fps30());
    assert!((end - 1.0).abs() < 0.01);
}

// Frame-by-frame scan over the whole settle window.
fn settle_frames_linear(fps: Fps, cfg: &SpringConfig, threshold: f64) -> u64 {
    let dt = fps.frame_duration_secs();
    let max_frames = fps.secs_to_frames_floor(MAX_SETTLE_SECS).max(1);
    let mut last_unsettled = 0u64;
    for f in 0..=max_frames {
        let t = f as f64 * dt;
        if cfg.displacement_bound(t) < threshold {
            break;
        }
        if cfg.displacement(t).abs() >= threshold {
            last_unsettled = f;
        }
    }
    last_unsettled + 1
}

#[test]
fn settle_search_agrees_with_a_full_scan() {
    let configs = [
        SpringConfig::default(),
        SpringConfig::with_damping(200.0),
        SpringConfig::new(100.0, 200.0, 0.5),
        SpringConfig::new(12.0, 100.0, 0.8),
        SpringConfig::new(20.0, 100.0, 1.0),
        SpringConfig::new(0.5, 300.0, 2.0),
        SpringConfig::with_damping(0.001),
    ];
    for fps in [fps30(), Fps::new(60000, 1001).unwrap()] {
        for cfg in &configs {
            for threshold in [DEFAULT_REST_THRESHOLD, 0.1] {
                assert_eq!(
                    settle_frames(fps, cfg, threshold),
                    settle_frames_linear(fps, cfg, threshold),
                    "{cfg:?} threshold={threshold}"
                );
            }
        }
    }
}

#[test]
fn lightly_damped_stretched_spring_starts_and_lands() {
    let s = Spring::unit(SpringConfig::with_damping(0.001)).stretched_to(30);
    let start = FrameIndex(0);
    assert_eq!(s.progress(start, start, fps30()), 0.0);
    for f in 1..=30 {
        assert!(s.progress(FrameIndex(f), start, fps30()).is_finite());
    }
}

#[test]
fn validate_rejects_non_positive_constants() {
    assert!(SpringConfig::new(0.0, 100.0, 1.0).validate().is_err());
    assert!(SpringConfig::new(10.0, -1.0, 1.0).validate().is_err());
    assert!(SpringConfig::new(10.0, 100.0, f64::NAN).validate().is_err());
    assert!(SpringConfig::default().validate().is_ok());
    assert!(
        Spring::unit(SpringConfig::default())
            .stretched_to(0)
            .validate()
            .is_err()
    );
}

#[test]
fn same_inputs_give_bit_identical_outputs() {
    let cfg = SpringConfig::new(12.0, 100.0, 0.8);
    for f in [0u64, 1, 7, 31, 90, 500] {
        let a = spring(FrameIndex(f), FrameIndex(3), fps30(), cfg);
        let b = spring(FrameIndex(f), FrameIndex(3), fps30(), cfg);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
