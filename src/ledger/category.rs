use std::fmt;

/// Expense categories offered by the tracker menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Travel,
    Utilities,
}

impl Category {
    /// Menu order.
    pub const ALL: [Category; 3] = [Category::Food, Category::Travel, Category::Utilities];

    /// Canonical tag name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Utilities => "Utilities",
        }
    }

    /// Icon shown in front of rendered records.
    pub fn marker(self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Travel => "🚗",
            Category::Utilities => "💡",
        }
    }

    /// Singular label used in record lines and menu entries.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Utilities => "Utility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
