use gmm_core::earthquakes::{
    check_magnitude, magnitude_to_moment, moment_to_magnitude, MAX_MAG, MIN_MAG,
};
use gmm_core::{FaultStyle, GmmError, ShearModulus};
use proptest::prelude::*;

fn rel_diff(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        a.abs()
    } else {
        ((a - b) / b).abs()
    }
}

proptest! {
    #[test]
    fn magnitude_in_range_is_identity(mw in MIN_MAG..=MAX_MAG) {
        prop_assert_eq!(check_magnitude(mw).unwrap(), mw);
    }

    #[test]
    fn magnitude_out_of_range_fails(mw in prop_oneof![-50.0..MIN_MAG, 9.700001..50.0]) {
        let is_out_of_range = matches!(check_magnitude(mw), Err(GmmError::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn moment_magnitude_round_trip(mw in MIN_MAG..=MAX_MAG) {
        let back = moment_to_magnitude(magnitude_to_moment(mw));
        // absolute near zero, relative elsewhere
        prop_assert!((back - mw).abs() <= 1e-9 * mw.abs().max(1.0));
    }

    #[test]
    fn moment_slip_round_trip(area in 1e2f64..1e12, slip in 1e-4f64..50.0) {
        let mu = ShearModulus::default();
        let back = mu.slip(area, mu.moment(area, slip));
        prop_assert!(rel_diff(back, slip) <= 1e-9);
    }

    #[test]
    fn rake_domain_is_fully_classified(rake in -180.0f64..=180.0) {
        prop_assert_ne!(FaultStyle::from_rake(rake), FaultStyle::Unknown);
    }
}
