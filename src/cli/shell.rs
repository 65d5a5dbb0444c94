use std::{env, io};

use tracing::{debug, info};

use crate::cli::input::{self, InteractiveInput, LineSource, ScriptedInput};
use crate::cli::menu::{self, MenuChoice, CHOICE_PROMPT};
use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;
use crate::errors::CliError;
use crate::ledger::{format_amount, Category, Ledger, Record};

pub const SCRIPT_ENV: &str = "EXPENSE_TRACKER_SCRIPT";
const NO_COLOR_ENV: &str = "NO_COLOR";

pub const ADDED_MESSAGE: &str = "Expense added successfully!";
pub const LIST_TITLE: &str = "All Recorded Expenses";
pub const EXIT_MESSAGE: &str = "Exiting... Goodbye!";
pub const CLOSING_MESSAGE: &str = "Memory cleared. Thank you for using Expense Tracker!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Flags collected from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub script: bool,
    pub plain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Runs one tracker session against stdin, interactively or in script mode.
pub fn run_cli(config: &Config, options: RunOptions) -> Result<(), CliError> {
    let mode = select_mode(options, env::var_os(SCRIPT_ENV).is_some());

    output::set_preferences(OutputPreferences {
        plain: config.plain_output || options.plain || env::var_os(NO_COLOR_ENV).is_some(),
        high_contrast: config.high_contrast,
    });

    info!(?mode, "starting expense tracker");
    match mode {
        CliMode::Interactive => Shell::new(InteractiveInput::new()).run()?,
        CliMode::Script => Shell::new(ScriptedInput::new(io::stdin().lock())).run()?,
    }
    Ok(())
}

/// Script mode when requested by flag or by the `EXPENSE_TRACKER_SCRIPT` variable.
pub fn select_mode(options: RunOptions, script_env: bool) -> CliMode {
    if options.script || script_env {
        CliMode::Script
    } else {
        CliMode::Interactive
    }
}

/// Menu loop owning the session ledger.
pub struct Shell<S> {
    source: S,
    ledger: Ledger,
}

impl<S: LineSource> Shell<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            ledger: Ledger::new(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Loops until the user exits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            menu::print_menu();
            let Some(line) = self.source.read_line(CHOICE_PROMPT)? else {
                break;
            };

            match menu::parse_choice(&line) {
                Ok(choice) => {
                    debug!(?choice, "menu selection");
                    if self.dispatch(choice)? == LoopControl::Exit {
                        break;
                    }
                }
                Err(err) => {
                    debug!(input = %line, "unusable menu selection");
                    output::error(err);
                }
            }
        }

        output::info(CLOSING_MESSAGE);
        info!(records = self.ledger.len(), "session finished");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<LoopControl> {
        match choice {
            MenuChoice::AddExpense(category) => self.add_expense(category),
            MenuChoice::ViewAll => {
                self.show_all();
                Ok(LoopControl::Continue)
            }
            MenuChoice::ViewTotal => {
                output::info(format!(
                    "💰 Total Expenses: {}",
                    format_amount(self.ledger.total())
                ));
                Ok(LoopControl::Continue)
            }
            MenuChoice::Exit => {
                output::info(EXIT_MESSAGE);
                Ok(LoopControl::Exit)
            }
        }
    }

    fn add_expense(&mut self, category: Category) -> io::Result<LoopControl> {
        let Some(amount) = input::read_amount(&mut self.source)? else {
            return Ok(LoopControl::Exit);
        };
        let Some(date) = input::read_date(&mut self.source)? else {
            return Ok(LoopControl::Exit);
        };

        self.ledger.add(Record::new(category, amount, date));
        output::success(ADDED_MESSAGE);
        Ok(LoopControl::Continue)
    }

    fn show_all(&self) {
        if !self.ledger.is_empty() {
            output::section(LIST_TITLE);
        }
        for line in self.ledger.list_all() {
            output::info(line);
        }
    }
}
