use thiserror::Error;

use crate::cli::output;
use crate::ledger::Category;

pub const MENU_TITLE: &str = "EXPENSE TRACKER SYSTEM";
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

/// Actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense(Category),
    ViewAll,
    ViewTotal,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("Invalid input. Please enter a number between 1 and 6.")]
    NotANumber(String),
    #[error("Invalid choice! Try again.")]
    OutOfRange(i64),
}

impl MenuChoice {
    /// Menu order; entry `i` is selected by typing `i + 1`.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddExpense(Category::Food),
        MenuChoice::AddExpense(Category::Travel),
        MenuChoice::AddExpense(Category::Utilities),
        MenuChoice::ViewAll,
        MenuChoice::ViewTotal,
        MenuChoice::Exit,
    ];

    pub fn from_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> String {
        match self {
            MenuChoice::AddExpense(category) => format!("Add {} Expense", category.label()),
            MenuChoice::ViewAll => "View All Expenses".into(),
            MenuChoice::ViewTotal => "View Total Expenses".into(),
            MenuChoice::Exit => "Exit".into(),
        }
    }
}

/// Parses a typed menu selection.
pub fn parse_choice(input: &str) -> Result<MenuChoice, ChoiceError> {
    let trimmed = input.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| ChoiceError::NotANumber(trimmed.to_string()))?;
    MenuChoice::from_number(number).ok_or(ChoiceError::OutOfRange(number))
}

pub fn print_menu() {
    output::banner(MENU_TITLE);
    for (index, choice) in MenuChoice::ALL.iter().enumerate() {
        output::info(format!("{}. {}", index + 1, choice.label()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_map_to_menu_entries() {
        assert_eq!(
            MenuChoice::from_number(1),
            Some(MenuChoice::AddExpense(Category::Food))
        );
        assert_eq!(
            MenuChoice::from_number(3),
            Some(MenuChoice::AddExpense(Category::Utilities))
        );
        assert_eq!(MenuChoice::from_number(6), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(7), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn labels_follow_menu_text() {
        let labels: Vec<String> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Add Food Expense",
                "Add Travel Expense",
                "Add Utility Expense",
                "View All Expenses",
                "View Total Expenses",
                "Exit",
            ]
        );
    }

    #[test]
    fn parse_choice_reports_kind_of_mistake() {
        assert_eq!(parse_choice(" 4 \n"), Ok(MenuChoice::ViewAll));
        assert_eq!(
            parse_choice("abc"),
            Err(ChoiceError::NotANumber("abc".into()))
        );
        assert_eq!(parse_choice("9"), Err(ChoiceError::OutOfRange(9)));
        assert_eq!(
            ChoiceError::OutOfRange(9).to_string(),
            "Invalid choice! Try again."
        );
    }
}
