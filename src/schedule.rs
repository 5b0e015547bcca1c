use serde::{Deserialize, Serialize};

use crate::terms::LoanTerms;

/// one month of a fixed-payment amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal_paid: f64,
    pub remaining_balance: f64,
}

/// full amortization schedule for one set of terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub terms: LoanTerms,
    pub payment: f64,
    pub rows: Vec<ScheduleRow>,
    pub total_interest: f64,
    pub total_paid: f64,
}

impl Schedule {
    /// generate the month-by-month schedule
    ///
    /// the payment is computed once and reused for every row; each month
    /// splits it into interest on the running balance and principal
    /// reduction. the loop is inherently sequential. always emits exactly
    /// `term_months` rows, and the stored balance is clamped at zero on
    /// every row so floating-point residue never shows through.
    pub fn generate(terms: &LoanTerms) -> Self {
        let payment = terms.payment();
        let monthly_rate = terms.monthly_rate();

        let mut rows = Vec::with_capacity(terms.term_months as usize);
        let mut balance = terms.principal as f64;

        for month in 1..=terms.term_months {
            let interest = balance * monthly_rate;
            let principal_paid = payment - interest;
            balance -= principal_paid;

            rows.push(ScheduleRow {
                month,
                payment,
                interest,
                principal_paid,
                remaining_balance: balance.max(0.0),
            });
        }

        let total_interest = rows.iter().map(|r| r.interest).sum();
        let total_paid = rows.iter().map(|r| r.payment).sum();

        Self {
            terms: *terms,
            payment,
            rows,
            total_interest,
            total_paid,
        }
    }

    /// get the row for a 1-based month number
    pub fn row(&self, month: u32) -> Option<&ScheduleRow> {
        if month == 0 {
            return None;
        }
        self.rows.get((month - 1) as usize)
    }

    /// remaining balance after the given payment; the original principal
    /// when no payment has been applied yet
    pub fn balance_after(&self, month: u32) -> f64 {
        self.row(month)
            .map(|r| r.remaining_balance)
            .unwrap_or(self.terms.principal as f64)
    }
}
