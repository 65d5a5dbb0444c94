//! Expense Tracker records categorized expenses in memory and reports them
//! through an interactive menu.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

/// Initializes global tracing and emits a startup log.
pub fn init() {
    utils::init_tracing();
    tracing::debug!("Expense tracker tracing initialized.");
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
