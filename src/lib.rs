pub mod errors;
pub mod format;
pub mod payment;
pub mod schedule;
pub mod terms;

// re-export key types
pub use errors::{LoanError, Result};
pub use format::{format_payment, format_row, format_schedule};
pub use payment::monthly_payment;
pub use schedule::{Schedule, ScheduleRow};
pub use terms::{LoanTerms, TermsBounds};
