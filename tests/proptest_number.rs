//! Property-based tests for hyperbolic number arithmetic
//!
//! Verifies the algebraic laws over randomly generated values. Laws whose
//! two sides perform the identical floating-point operations are checked
//! with exact equality; laws that reassociate operations (associativity,
//! distributivity, exponentiation by squaring) are checked within a
//! tolerance scaled by the input magnitudes, since intermediate terms can
//! cancel far below their own size.

use proptest::prelude::*;

use hypernum::{mag, HyperbolicNumber};

/// Component domain bounded away from overflow
fn arb_component() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn arb_number() -> impl Strategy<Value = HyperbolicNumber> {
    (arb_component(), arb_component()).prop_map(|(a, b)| HyperbolicNumber::new(a, b))
}

/// Compare componentwise within `tol * scale`, where `scale` bounds the
/// intermediate term magnitudes of the law under test
fn approx_eq(x: HyperbolicNumber, y: HyperbolicNumber, scale: f64, tol: f64) -> bool {
    (x.a - y.a).abs() <= tol * scale && (x.b - y.b).abs() <= tol * scale
}

proptest! {
    #[test]
    fn prop_add_commutative(x in arb_number(), y in arb_number()) {
        prop_assert_eq!(x + y, y + x);
    }

    #[test]
    fn prop_mul_commutative(x in arb_number(), y in arb_number()) {
        prop_assert_eq!(x * y, y * x);
    }

    #[test]
    fn prop_add_associative(x in arb_number(), y in arb_number(), z in arb_number()) {
        let scale = 1.0 + mag(x) + mag(y) + mag(z);
        prop_assert!(approx_eq((x + y) + z, x + (y + z), scale, 1e-12));
    }

    #[test]
    fn prop_mul_associative(x in arb_number(), y in arb_number(), z in arb_number()) {
        let scale = (1.0 + mag(x)) * (1.0 + mag(y)) * (1.0 + mag(z));
        prop_assert!(approx_eq((x * y) * z, x * (y * z), scale, 1e-12));
    }

    #[test]
    fn prop_mul_distributes_over_add(x in arb_number(), y in arb_number(), z in arb_number()) {
        let scale = (1.0 + mag(x)) * (1.0 + mag(y) + mag(z));
        prop_assert!(approx_eq(x * (y + z), x * y + x * z, scale, 1e-12));
    }

    #[test]
    fn prop_identities(x in arb_number()) {
        prop_assert_eq!(x + HyperbolicNumber::zero(), x);
        prop_assert_eq!(x * HyperbolicNumber::one(), x);
    }

    #[test]
    fn prop_scalar_scaling(k in arb_component(), a in arb_component(), b in arb_component()) {
        let x = HyperbolicNumber::new(a, b);
        prop_assert_eq!(k * x, HyperbolicNumber::new(k * a, k * b));
        // Right multiplication lifts the scalar and lands on the same value
        prop_assert_eq!(x * k, k * x);
    }

    #[test]
    fn prop_left_scalar_add_hits_both_components(
        s in arb_component(),
        a in arb_component(),
        b in arb_component(),
    ) {
        let x = HyperbolicNumber::new(a, b);
        prop_assert_eq!(s + x, HyperbolicNumber::new(s + a, s + b));
    }

    #[test]
    fn prop_pow_one_is_identity(x in arb_number()) {
        prop_assert_eq!(x.pow(1).unwrap(), x);
    }

    #[test]
    fn prop_pow_zero_returns_base(x in arb_number()) {
        prop_assert_eq!(x.pow(0).unwrap(), x);
    }

    #[test]
    fn prop_pow_matches_naive_product(
        a in -10.0f64..10.0,
        b in -10.0f64..10.0,
        n in 1i64..12,
    ) {
        let x = HyperbolicNumber::new(a, b);
        let mut naive = x;
        for _ in 1..n {
            naive = naive * x;
        }
        let scale = (1.0 + mag(x)).powi(n as i32);
        prop_assert!(approx_eq(x.pow(n).unwrap(), naive, scale, 1e-12));
    }

    #[test]
    fn prop_negative_exponent_always_rejected(x in arb_number(), n in i64::MIN..0) {
        prop_assert!(x.pow(n).is_err());
    }

    #[test]
    fn prop_mag_on_real_axis_is_abs(a in arb_component()) {
        let m = mag(HyperbolicNumber::new(a, 0.0));
        prop_assert!((m - a.abs()).abs() <= f64::EPSILON * a.abs());
    }

    #[test]
    fn prop_mag_non_negative(x in arb_number()) {
        prop_assert!(mag(x) >= 0.0);
    }

    #[test]
    fn prop_scalar_equality_lifting(s in arb_component()) {
        let lifted = HyperbolicNumber::from_scalar(s);
        prop_assert!(lifted == s);
        prop_assert!(s == lifted);
    }
}
