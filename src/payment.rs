/// calculate the fixed monthly payment for a fully amortizing loan
///
/// `payment = P * r * (1 + r)^n / ((1 + r)^n - 1)` with the monthly rate
/// `r` derived from the whole-percent annual rate. pure and deterministic;
/// no rounding happens here, currency rounding is a display concern.
///
/// callers guarantee `term_months >= 1`; the typed path enforces it in
/// `LoanTerms::new`.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_months: u32) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;

    // zero-interest loan: the annuity denominator degenerates to zero,
    // fall back to straight division
    if monthly_rate == 0.0 {
        return principal / term_months as f64;
    }

    let compound = (1.0 + monthly_rate).powi(term_months as i32);
    principal * monthly_rate * compound / (compound - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // 1000 at 10% over 12 months ~ 87.92/month
        let payment = monthly_payment(1000.0, 10.0, 12);
        assert!((payment - 87.9158).abs() < 1e-3);
    }

    #[test]
    fn test_short_term_small_rate() {
        // 1000 at 1% over 2 months ~ 500.63/month
        let payment = monthly_payment(1000.0, 1.0, 2);
        assert!((payment - 500.625).abs() < 1e-2);
    }

    #[test]
    fn test_zero_rate_fallback() {
        let payment = monthly_payment(1200.0, 0.0, 12);
        assert_eq!(payment, 100.0);
    }

    #[test]
    fn test_single_month_term() {
        // one payment covers principal plus one month of interest
        let payment = monthly_payment(1000.0, 12.0, 1);
        assert!((payment - 1010.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotone_in_rate() {
        let mut previous = monthly_payment(100_000.0, 1.0, 360);
        for rate in 2..=10 {
            let payment = monthly_payment(100_000.0, rate as f64, 360);
            assert!(payment > previous, "rate {rate} did not raise the payment");
            previous = payment;
        }
    }

    #[test]
    fn test_monotone_in_principal() {
        let small = monthly_payment(10_000.0, 5.0, 60);
        let large = monthly_payment(20_000.0, 5.0, 60);
        assert!(large > small);
    }

    #[test]
    fn test_monotone_in_term() {
        let mut previous = monthly_payment(100_000.0, 5.0, 12);
        for term in [24, 60, 120, 240, 360] {
            let payment = monthly_payment(100_000.0, 5.0, term);
            assert!(payment < previous, "term {term} did not lower the payment");
            previous = payment;
        }
    }

    #[test]
    fn test_deterministic() {
        let a = monthly_payment(123_456.0, 7.0, 84);
        let b = monthly_payment(123_456.0, 7.0, 84);
        assert_eq!(a, b);
    }
}
