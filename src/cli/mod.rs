pub mod input;
pub mod menu;
pub mod output;
mod shell;

pub use shell::{
    run_cli, select_mode, CliMode, LoopControl, RunOptions, Shell, ADDED_MESSAGE, CLOSING_MESSAGE,
    EXIT_MESSAGE, LIST_TITLE, SCRIPT_ENV,
};
