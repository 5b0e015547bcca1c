use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::schedule::{Schedule, ScheduleRow};

const HEADER: &str = "Number  Payment     Interest    Loan       Balance";

/// render a currency amount with exactly two decimals
///
/// rounding is pinned to round-half-up (away from zero) and happens only
/// here; schedule math stays at full f64 precision
pub fn format_payment(value: f64) -> String {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .map(|d| format!("{d:.2}"))
        .unwrap_or_else(|| format!("{value:.2}"))
}

/// render one schedule row with right-aligned fixed-width columns
///
/// balance prints as its absolute value so residual float noise on the
/// final rows can never show a negative zero
pub fn format_row(row: &ScheduleRow) -> String {
    format!(
        "{:>4} {:>10} {:>9} {:>8} {:>9}",
        row.month,
        format_payment(row.payment),
        format_payment(row.interest),
        format_payment(row.principal_paid),
        format_payment(row.remaining_balance.abs()),
    )
}

/// render the full schedule as a text table
pub fn format_schedule(schedule: &Schedule) -> String {
    let mut out = String::with_capacity((schedule.rows.len() + 1) * 48);
    out.push('\n');
    out.push_str(HEADER);
    out.push('\n');
    for row in &schedule.rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}
