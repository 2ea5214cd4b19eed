use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frame_duration_matches_rate() {
    let fps = Fps::new(50, 1).unwrap();
    assert_eq!(fps.frame_duration(), Duration::from_millis(20));
    assert!((fps.as_f64() - 50.0).abs() < 1e-12);
}

#[test]
fn canvas_scaled_doubles_and_never_collapses() {
    let c = Canvas {
        width: 400,
        height: 560,
    };
    assert_eq!(
        c.scaled(2.0),
        Canvas {
            width: 800,
            height: 1120
        }
    );
    assert_eq!(
        c.scaled(0.0),
        Canvas {
            width: 1,
            height: 1
        }
    );
    assert_eq!(c.scaled(f64::NAN), c);
}

#[test]
fn finite_or_replaces_nan_and_infinity() {
    assert_eq!(finite_or(3.5, 1.0), 3.5);
    assert_eq!(finite_or(f64::NAN, 1.0), 1.0);
    assert_eq!(finite_or(f64::NEG_INFINITY, 2.0), 2.0);
}
