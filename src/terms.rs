use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};
use crate::payment::monthly_payment;

/// immutable input triple for a fixed-rate amortizing loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: u64,
    pub annual_rate_percent: u32,
    pub term_months: u32,
}

impl LoanTerms {
    /// create validated terms
    ///
    /// enforces only the structural invariants the formulas need:
    /// positive principal and at least one month. a zero rate is a valid
    /// zero-interest loan. range policy lives in [`TermsBounds`].
    pub fn new(principal: u64, annual_rate_percent: u32, term_months: u32) -> Result<Self> {
        if principal == 0 {
            return Err(LoanError::ZeroPrincipal);
        }
        if term_months == 0 {
            return Err(LoanError::ZeroTerm);
        }
        Ok(Self {
            principal,
            annual_rate_percent,
            term_months,
        })
    }

    /// monthly rate from the whole-percent annual rate
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent as f64 / 100.0 / 12.0
    }

    /// fixed monthly payment for these terms
    pub fn payment(&self) -> f64 {
        monthly_payment(
            self.principal as f64,
            self.annual_rate_percent as f64,
            self.term_months,
        )
    }
}

/// acceptable input ranges, checked by the interactive shell before any
/// calculation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermsBounds {
    pub min_principal: u64,
    pub max_principal: u64,
    pub min_rate_percent: u32,
    pub max_rate_percent: u32,
    pub min_term_months: u32,
    pub max_term_months: u32,
}

impl Default for TermsBounds {
    fn default() -> Self {
        Self {
            min_principal: 1_000,
            max_principal: 1_000_000,
            min_rate_percent: 1,
            max_rate_percent: 10,
            min_term_months: 2,
            max_term_months: 360,
        }
    }
}

impl TermsBounds {
    pub fn validate(&self, terms: &LoanTerms) -> Result<()> {
        if terms.principal < self.min_principal || terms.principal > self.max_principal {
            return Err(LoanError::PrincipalOutOfRange {
                value: terms.principal,
                min: self.min_principal,
                max: self.max_principal,
            });
        }
        if terms.annual_rate_percent < self.min_rate_percent
            || terms.annual_rate_percent > self.max_rate_percent
        {
            return Err(LoanError::RateOutOfRange {
                value: terms.annual_rate_percent,
                min: self.min_rate_percent,
                max: self.max_rate_percent,
            });
        }
        if terms.term_months < self.min_term_months || terms.term_months > self.max_term_months {
            return Err(LoanError::TermOutOfRange {
                value: terms.term_months,
                min: self.min_term_months,
                max: self.max_term_months,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_invariants() {
        assert!(LoanTerms::new(1000, 10, 12).is_ok());
        assert_eq!(LoanTerms::new(0, 10, 12), Err(LoanError::ZeroPrincipal));
        assert_eq!(LoanTerms::new(1000, 10, 0), Err(LoanError::ZeroTerm));

        // zero rate is a valid zero-interest loan
        assert!(LoanTerms::new(1000, 0, 12).is_ok());
    }

    #[test]
    fn test_monthly_rate() {
        let terms = LoanTerms::new(1000, 10, 12).unwrap();
        assert!((terms.monthly_rate() - 0.10 / 12.0).abs() < 1e-12);

        let terms = LoanTerms::new(1000, 12, 12).unwrap();
        assert!((terms.monthly_rate() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_default_bounds_accept_interactive_ranges() {
        let bounds = TermsBounds::default();

        let terms = LoanTerms::new(1_000, 1, 2).unwrap();
        assert!(bounds.validate(&terms).is_ok());

        let terms = LoanTerms::new(1_000_000, 10, 360).unwrap();
        assert!(bounds.validate(&terms).is_ok());
    }

    #[test]
    fn test_bounds_reject_out_of_range() {
        let bounds = TermsBounds::default();

        let terms = LoanTerms::new(999, 5, 12).unwrap();
        assert!(matches!(
            bounds.validate(&terms),
            Err(LoanError::PrincipalOutOfRange { value: 999, .. })
        ));

        let terms = LoanTerms::new(10_000, 11, 12).unwrap();
        assert!(matches!(
            bounds.validate(&terms),
            Err(LoanError::RateOutOfRange { value: 11, .. })
        ));

        let terms = LoanTerms::new(10_000, 5, 361).unwrap();
        assert!(matches!(
            bounds.validate(&terms),
            Err(LoanError::TermOutOfRange { value: 361, .. })
        ));

        // term of 1 is computable but outside the interactive range
        let terms = LoanTerms::new(10_000, 5, 1).unwrap();
        assert!(bounds.validate(&terms).is_err());
    }
}
