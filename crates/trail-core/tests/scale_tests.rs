// Host-side tests for the orbit scale hysteresis.

use trail_core::*;

#[test]
fn press_drives_scale_up_without_overshoot() {
    let mut s = OrbitScale::default();
    let mut prev = s.value();
    for _ in 0..2000 {
        let v = s.update(true);
        assert!(v >= prev, "expanding scale decreased: {} -> {}", prev, v);
        assert!(v <= MAX_SCALE);
        prev = v;
    }
    assert!((MAX_SCALE - prev).abs() < 1e-4);
}

#[test]
fn release_drives_scale_down_without_undershoot() {
    let mut s = OrbitScale::default();
    for _ in 0..500 {
        s.update(true);
    }
    let mut prev = s.value();
    for _ in 0..5000 {
        let v = s.update(false);
        assert!(v <= prev, "contracting scale increased: {} -> {}", prev, v);
        assert!(v >= MIN_SCALE, "undershoot: {}", v);
        prev = v;
    }
    assert!((prev - MIN_SCALE).abs() < 1e-4);
}

#[test]
fn raw_decay_never_crosses_the_floor() {
    // The contracting step carries no clamp of its own in the formula; check
    // the unclamped arithmetic directly, including values a few ulps above 1.
    let mut starts = vec![MAX_SCALE, 1.25, 1.001];
    let mut v = MIN_SCALE;
    for _ in 0..8 {
        v = f32::from_bits(v.to_bits() + 1);
        starts.push(v);
    }
    for start in starts {
        let mut v = start;
        for _ in 0..20_000 {
            let next = ease_toward(v, MIN_SCALE, SCALE_EASE_RATE);
            assert!(next >= MIN_SCALE, "{} decayed below floor from {}", next, start);
            assert!(next <= v);
            v = next;
        }
    }
}

#[test]
fn arbitrary_press_history_stays_in_bounds() {
    let mut s = OrbitScale::default();
    // Cheap xorshift so the pattern is irregular but reproducible.
    let mut x: u32 = 0x1234_5678;
    for _ in 0..10_000 {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        let v = s.update(x & 1 == 1);
        assert!((MIN_SCALE..=MAX_SCALE).contains(&v));
        assert!(v.is_finite());
    }
}

#[test]
fn mode_is_a_pure_function_of_press() {
    assert_eq!(ScaleMode::from_pressed(true), ScaleMode::Expanding);
    assert_eq!(ScaleMode::from_pressed(false), ScaleMode::Contracting);
    assert_eq!(ScaleMode::default(), ScaleMode::Contracting);
}
