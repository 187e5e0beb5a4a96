/// Format a float the way the diagnostic file expects: integral values keep
/// one decimal ("20.0"), everything else uses the shortest exact form ("12.5").
pub fn fmt_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// Format an optional gigabyte figure: "12.5 GB", or "—" when unknown.
pub fn fmt_gb(gb: Option<f64>) -> String {
    match gb {
        Some(v) => format!("{:.1} GB", v),
        None    => "—".to_string(),
    }
}

/// Format an optional text cell, "—" when missing.
pub fn fmt_opt(s: Option<&str>) -> String {
    s.unwrap_or("—").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_keeps_one_decimal_for_integers() {
        assert_eq!(fmt_float(20.0), "20.0");
        assert_eq!(fmt_float(0.0), "0.0");
        assert_eq!(fmt_float(-3.0), "-3.0");
        assert_eq!(fmt_float(12.5), "12.5");
        assert_eq!(fmt_float(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(fmt_float(1e16), "10000000000000000.0");
        assert_eq!(fmt_float(-2e20), "-200000000000000000000.0");
    }

    #[test]
    fn gb_and_missing_values() {
        assert_eq!(fmt_gb(Some(80.0)), "80.0 GB");
        assert_eq!(fmt_gb(None), "—");
        assert_eq!(fmt_opt(None), "—");
        assert_eq!(fmt_opt(Some("x")), "x");
    }
}
