//! Expense records and the in-memory ledger that owns them.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;

pub use category::Category;
pub use ledger::{Ledger, EMPTY_LEDGER_MESSAGE};
pub use record::{format_amount, Record, CURRENCY_LABEL};
