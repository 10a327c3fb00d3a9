//! Fuzz target for hyperbolic number arithmetic
//!
//! Feeds arbitrary components and exponents through every operation. The
//! operations should either produce a value or return an error, never
//! panic, including for NaN, infinity, and extreme exponents.

#![no_main]

use libfuzzer_sys::fuzz_target;

use hypernum::{hyp, mag, re, HyperbolicNumber};

fuzz_target!(|input: (f64, f64, f64, f64, f64, i64)| {
    let (a, b, c, d, s, n) = input;
    let x = HyperbolicNumber::new(a, b);
    let y = HyperbolicNumber::new(c, d);

    // Operators are total over all component values
    let _ = x + y;
    let _ = x - y;
    let _ = -x;
    let _ = x * y;
    let _ = x + s;
    let _ = s + x;
    let _ = x * s;
    let _ = s * x;

    // Checked operations return Ok or Err, never abort
    let _ = x.left_add(s);
    let _ = x.left_mul(s);
    let _ = x.left_add(y);
    let _ = x.pow(n);
    let _ = x.pow(s);

    // Queries and renderings are total
    let _ = re(x);
    let _ = hyp(x);
    let _ = mag(x);
    let _ = x.to_string();
    let _ = x == y;
    let _ = x == s;
});
