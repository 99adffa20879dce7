/// Formats a float with fixed decimals, or returns "nan" if it is not finite.
pub fn fmt_num(v: f64, decimals: usize) -> String {
    if v.is_finite() {
        format!("{v:.decimals$}")
    } else {
        "nan".to_owned()
    }
}

/// Formats a float in scientific notation with three significant decimals.
pub fn fmt_sci(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.3e}")
    } else {
        "nan".to_owned()
    }
}

/// Formats a probability; values too small for three decimals read "0.000".
pub fn fmt_prob(p: f64) -> String {
    fmt_num(p, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num_handles_nan() {
        assert_eq!(fmt_num(f64::NAN, 4), "nan");
        assert_eq!(fmt_num(0.92084, 4), "0.9208");
    }

    #[test]
    fn test_fmt_sci() {
        assert_eq!(fmt_sci(0.000_123_4), "1.234e-4");
        assert_eq!(fmt_sci(f64::INFINITY), "nan");
    }
}
