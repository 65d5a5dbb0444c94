use std::{env, process};

use expense_tracker::{
    cli::{run_cli, RunOptions},
    config::ConfigManager,
    errors::CliError,
    init,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let mut options = RunOptions::default();
    let mut init_config = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--script" => options.script = true,
            "--plain" => options.plain = true,
            "--init-config" => init_config = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                print_usage();
                return Err(CliError::Usage(format!("unknown argument `{other}`")));
            }
        }
    }

    let manager = ConfigManager::new();
    let mut config = manager.load()?;
    if init_config {
        config.plain_output |= options.plain;
        manager.save(&config)?;
        println!("Wrote preferences to {}", manager.path().display());
        return Ok(());
    }
    run_cli(&config, options)
}

fn print_usage() {
    eprintln!(
        "Usage: expense_tracker [--script] [--plain] [--init-config]\n\
         Options:\n  \
         --script       read menu input line by line from stdin\n  \
         --plain        disable colours and styling\n  \
         --init-config  write the preferences file and exit"
    );
}
