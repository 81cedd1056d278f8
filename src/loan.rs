//! Amortizing loan payment and implied-rate recovery
//!
//! The workbook stores the monthly mortgage payment but not the exact rate that
//! produced it, so the rate is recovered by bisection on the payment formula.

/// Lower bound of the annual rate search
pub const RATE_SEARCH_LOW: f64 = 1e-6;
/// Upper bound of the annual rate search
pub const RATE_SEARCH_HIGH: f64 = 0.2;
/// Fixed number of halvings; bounds the work of every search
pub const RATE_SEARCH_ITERATIONS: u32 = 100;

/// Level payment for an amortizing loan
///
/// # Arguments
/// * `rate` - Periodic rate (e.g., annual / 12)
/// * `periods` - Number of payments
/// * `principal` - Amount borrowed
///
/// Returns 0 when there is nothing to amortize (`periods <= 0` or
/// `principal <= 0`) and straight-line repayment when `rate == 0`. Terms long
/// enough for the growth factor to overflow converge on interest-only.
pub fn payment(rate: f64, periods: i64, principal: f64) -> f64 {
    if periods <= 0 || principal <= 0.0 {
        return 0.0;
    }
    let factor = (1.0 + rate).powf(periods as f64);
    if rate == 0.0 || factor == 1.0 {
        return principal / periods as f64;
    }
    if !factor.is_finite() {
        return principal * rate;
    }
    principal * rate * factor / (factor - 1.0)
}

/// Monthly payment for an annual rate over a term in years
pub fn monthly_payment(annual_rate: f64, amort_years: u32, principal: f64) -> f64 {
    payment(annual_rate / 12.0, i64::from(amort_years) * 12, principal)
}

/// Recover the annual rate whose monthly payment on `principal` over
/// `amort_years` equals `target_payment`.
///
/// Returns `None` for degenerate input (non-positive payment, principal or
/// term), in which case the caller supplies its own fallback rate.
pub fn implied_annual_rate(target_payment: f64, principal: f64, amort_years: u32) -> Option<f64> {
    let periods = i64::from(amort_years) * 12;
    if target_payment <= 0.0 || principal <= 0.0 || periods <= 0 {
        return None;
    }

    let mut low = RATE_SEARCH_LOW;
    let mut high = RATE_SEARCH_HIGH;

    for _ in 0..RATE_SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        if payment(mid / 12.0, periods, principal) > target_payment {
            // Rate too high
            high = mid;
        } else {
            low = mid;
        }
    }

    Some((low + high) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_mortgage_payment() {
        // $200,000 at 6% over 30 years
        let pmt = monthly_payment(0.06, 30, 200_000.0);
        assert_abs_diff_eq!(pmt, 1199.10, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_abs_diff_eq!(payment(0.0, 120, 12_000.0), 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_payment_is_zero() {
        assert_eq!(payment(0.005, 0, 100_000.0), 0.0);
        assert_eq!(payment(0.005, -12, 100_000.0), 0.0);
        assert_eq!(payment(0.005, 360, 0.0), 0.0);
        assert_eq!(payment(0.005, 360, -5.0), 0.0);
    }

    #[test]
    fn test_very_long_term_is_interest_only() {
        let periods = i64::from(u32::MAX) * 12;
        assert_abs_diff_eq!(payment(0.005, periods, 100_000.0), 500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(monthly_payment(0.06, 100_000, 100_000.0), 500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_period_count_is_not_truncated() {
        // 2^32 + 8 periods must not collapse to an 8-period loan
        let pmt = payment(0.005, (1_i64 << 32) + 8, 1_000.0);
        assert_abs_diff_eq!(pmt, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_recovers_known_rate() {
        for &(rate, years, principal) in &[
            (0.0389, 40, 2_493_696.0),
            (0.0525, 25, 850_000.0),
            (0.0125, 10, 50_000.0),
            (0.1500, 30, 300_000.0),
        ] {
            let target = monthly_payment(rate, years, principal);
            let recovered = implied_annual_rate(target, principal, years).unwrap();
            assert_abs_diff_eq!(recovered, rate, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_rate_search_is_bounded() {
        // A payment below the zero-rate amount pins to the lower bound,
        // one above the 20% amount pins to the upper bound
        let principal = 100_000.0;
        let low = implied_annual_rate(1.0, principal, 30).unwrap();
        let high = implied_annual_rate(50_000.0, principal, 30).unwrap();
        assert_abs_diff_eq!(low, RATE_SEARCH_LOW, epsilon = 1e-12);
        assert_abs_diff_eq!(high, RATE_SEARCH_HIGH, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_inversion_returns_none() {
        assert!(implied_annual_rate(0.0, 100_000.0, 30).is_none());
        assert!(implied_annual_rate(500.0, 0.0, 30).is_none());
        assert!(implied_annual_rate(500.0, 100_000.0, 0).is_none());
    }
}
