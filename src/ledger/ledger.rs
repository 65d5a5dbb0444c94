use tracing::debug;

use super::record::Record;

/// Line reported by [`Ledger::list_all`] when nothing has been recorded.
pub const EMPTY_LEDGER_MESSAGE: &str = "No expenses recorded yet.";

/// Append-only, insertion-ordered store of expense records.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: Record) {
        debug!(
            category = %record.category(),
            amount = record.amount(),
            position = self.records.len(),
            "expense recorded"
        );
        self.records.push(record);
    }

    /// Rendered records in insertion order, or the single empty-ledger line.
    pub fn list_all(&self) -> Vec<String> {
        if self.records.is_empty() {
            return vec![EMPTY_LEDGER_MESSAGE.to_string()];
        }
        self.records.iter().map(Record::render).collect()
    }

    pub fn total(&self) -> f64 {
        // fold from +0.0; `Sum for f64` starts at -0.0 and would print "-0" when empty
        self.records
            .iter()
            .fold(0.0, |total, record| total + record.amount())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
