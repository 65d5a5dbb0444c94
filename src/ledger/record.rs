use std::fmt;

use super::category::Category;

/// Currency prefix applied to every displayed amount.
pub const CURRENCY_LABEL: &str = "Rs.";

/// Significant digits kept when displaying an amount.
const DISPLAY_PRECISION: i32 = 6;

/// Formats an amount with the currency label, e.g. `Rs.120.5`.
///
/// Keeps six significant digits of the fraction and drops trailing zeros, so
/// summation noise like `30.299999999999997` shows as `30.3`. Large values are
/// never written in exponent form.
pub fn format_amount(amount: f64) -> String {
    format!("{CURRENCY_LABEL}{}", display_number(amount))
}

fn display_number(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value.abs());
    }
    let integer_digits = value.abs().log10().floor() as i32 + 1;
    let decimals = (DISPLAY_PRECISION - integer_digits).max(0) as usize;
    let fixed = format!("{value:.decimals$}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

/// One logged expense. Never mutated once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    category: Category,
    amount: f64,
    date: String,
}

impl Record {
    /// Builds a record from already validated input; `amount` must be non-negative.
    pub fn new(category: Category, amount: f64, date: impl Into<String>) -> Self {
        Self {
            category,
            amount,
            date: date.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Single display line, e.g. `🍔 Food Expense: Rs.50 on 01/01/2024`.
    pub fn render(&self) -> String {
        format!(
            "{} {} Expense: {} on {}",
            self.category.marker(),
            self.category.label(),
            format_amount(self.amount),
            self.date
        )
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
