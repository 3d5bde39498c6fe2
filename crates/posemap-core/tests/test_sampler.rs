use rand::rngs::StdRng;
use rand::SeedableRng;

use posemap_core::error::PosemapError;
use posemap_core::sampler::{sample_window, FrameWindow};

#[test]
fn test_window_start_within_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen_first = false;
    let mut seen_last = false;

    for _ in 0..5000 {
        let w = sample_window(151, 5, &mut rng).unwrap();
        assert!(w.start <= 146, "start {} out of range", w.start);
        assert_eq!(w.len, 5);
        assert_eq!(w.frames().len(), 5);
        seen_first |= w.start == 0;
        seen_last |= w.start == 146;
    }
    assert!(seen_first && seen_last, "range endpoints never drawn");
}

#[test]
fn test_window_exact_fit_starts_at_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        assert_eq!(
            sample_window(5, 5, &mut rng).unwrap(),
            FrameWindow { start: 0, len: 5 }
        );
    }
}

#[test]
fn test_window_too_short_video_is_invalid() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = sample_window(4, 5, &mut rng).unwrap_err();
    assert!(matches!(err, PosemapError::InvalidRecord(_)));
}

#[test]
fn test_window_is_reproducible_with_seeded_rng() {
    let a: Vec<usize> = {
        let mut rng = StdRng::seed_from_u64(42);
        (0..10).map(|_| sample_window(60, 5, &mut rng).unwrap().start).collect()
    };
    let b: Vec<usize> = {
        let mut rng = StdRng::seed_from_u64(42);
        (0..10).map(|_| sample_window(60, 5, &mut rng).unwrap().start).collect()
    };
    assert_eq!(a, b);
}
