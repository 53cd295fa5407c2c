//! Serving scaling and amount formatting
//!
//! Scaling stays full precision; `format_amount` is the only place where an
//! amount is rounded for display.

/// Rescale an amount for a different number of servings
///
/// A missing amount stays missing. An original serving count of zero or less
/// gives no meaningful ratio, so the amount is returned unscaled.
pub fn scale_amount_by_servings(
    amount: Option<f64>,
    original_servings: f64,
    new_servings: f64,
) -> Option<f64> {
    let amount = amount?;

    if original_servings <= 0.0 {
        return Some(amount);
    }

    Some(amount * (new_servings / original_servings))
}

/// Format an amount for display
///
/// Whole numbers print without a decimal point; everything else is rounded to
/// two decimals with trailing zeros dropped. Missing and non-finite amounts
/// print as an empty string.
pub fn format_amount(amount: Option<f64>) -> String {
    let amount = match amount {
        Some(a) if a.is_finite() => a,
        _ => return String::new(),
    };

    let rounded = if amount.fract() == 0.0 {
        amount
    } else {
        (amount * 100.0).round() / 100.0
    };

    // f64 Display already prints the shortest form ("3", "2.5", "2.33")
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_missing_amount() {
        assert_eq!(scale_amount_by_servings(None, 4.0, 8.0), None);
    }

    #[test]
    fn test_scale_neutral_without_original_servings() {
        for n in [1.0, 3.0, 12.0] {
            assert_eq!(scale_amount_by_servings(Some(2.5), 0.0, n), Some(2.5));
            assert_eq!(scale_amount_by_servings(Some(2.5), -1.0, n), Some(2.5));
        }
    }

    #[test]
    fn test_scale_linear() {
        for s in [1.0, 2.0, 3.0, 7.0] {
            let doubled = scale_amount_by_servings(Some(150.0), s, 2.0 * s).unwrap();
            assert!((doubled - 300.0).abs() < 1e-9);
        }
        assert_eq!(scale_amount_by_servings(Some(200.0), 4.0, 8.0), Some(400.0));
    }

    #[test]
    fn test_scale_down_keeps_precision() {
        let third = scale_amount_by_servings(Some(1.0), 3.0, 1.0).unwrap();
        let back = scale_amount_by_servings(Some(third), 1.0, 3.0).unwrap();
        assert!((back - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale_passes_negative_amounts_through() {
        assert_eq!(scale_amount_by_servings(Some(-2.0), 1.0, 2.0), Some(-4.0));
    }

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_amount(Some(3.0)), "3");
        assert_eq!(format_amount(Some(400.0)), "400");
        assert_eq!(format_amount(Some(-12.0)), "-12");
        assert_eq!(format_amount(Some(0.0)), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_amount(Some(2.5)), "2.5");
        assert_eq!(format_amount(Some(2.50)), "2.5");
        assert_eq!(format_amount(Some(2.33333)), "2.33");
        assert_eq!(format_amount(Some(2.333333)), "2.33");
        assert_eq!(format_amount(Some(236.59)), "236.59");
        assert_eq!(format_amount(Some(0.666)), "0.67");
    }

    #[test]
    fn test_format_rounds_to_whole() {
        assert_eq!(format_amount(Some(2.999)), "3");
        assert_eq!(format_amount(Some(0.1 + 0.2)), "0.3");
        assert_eq!(format_amount(Some(-0.001)), "0");
    }

    #[test]
    fn test_format_missing_and_non_finite() {
        assert_eq!(format_amount(None), "");
        assert_eq!(format_amount(Some(f64::NAN)), "");
        assert_eq!(format_amount(Some(f64::INFINITY)), "");
    }
}
