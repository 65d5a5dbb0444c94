use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input};
use thiserror::Error;
use tracing::warn;

use crate::ledger::CURRENCY_LABEL;

pub const INVALID_AMOUNT_PROMPT: &str = "Invalid amount. Enter a non-negative number: ";
pub const DATE_PROMPT: &str = "Enter date (DD/MM/YYYY): ";

/// Source of user-typed lines. `Ok(None)` signals end of input.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, echoing each prompt to stdout.
pub struct ScriptedInput<R> {
    reader: R,
}

impl<R: BufRead> ScriptedInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptedInput<R> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            writeln!(stdout)?;
            return Ok(None);
        }
        let line = buffer.trim_end_matches(&['\n', '\r'][..]).to_string();
        writeln!(stdout)?;
        Ok(Some(line))
    }
}

/// Terminal prompts rendered through `dialoguer`.
pub struct InteractiveInput {
    theme: ColorfulTheme,
}

impl InteractiveInput {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for InteractiveInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for InteractiveInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        // the theme draws its own separator after the prompt
        let label = prompt.trim_end().trim_end_matches(':');
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text();
        prompt_outcome(result)
    }
}

/// Maps a terminal prompt result onto the `LineSource` contract; EOF becomes `None`.
fn prompt_outcome(result: Result<String, dialoguer::Error>) -> io::Result<Option<String>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(dialoguer::Error::IO(err)) => Err(err),
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("amount {0} is negative")]
    Negative(f64),
    #[error("amount must be finite")]
    NotFinite,
}

/// Parses a typed amount, accepting only finite non-negative numbers.
pub fn parse_amount(input: &str) -> Result<f64, AmountError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(AmountError::NotFinite);
    }
    if value < 0.0 {
        return Err(AmountError::Negative(value));
    }
    // normalise -0.0 so it never displays as "-0"
    Ok(if value == 0.0 { 0.0 } else { value })
}

pub fn amount_prompt() -> String {
    format!("Enter amount ({CURRENCY_LABEL}): ")
}

/// Prompts until a valid amount is typed. `Ok(None)` on end of input.
pub fn read_amount(source: &mut impl LineSource) -> io::Result<Option<f64>> {
    let mut prompt = amount_prompt();
    loop {
        let Some(line) = source.read_line(&prompt)? else {
            return Ok(None);
        };
        match parse_amount(&line) {
            Ok(amount) => return Ok(Some(amount)),
            Err(err) => {
                warn!(%err, "rejected amount");
                prompt = INVALID_AMOUNT_PROMPT.to_string();
            }
        }
    }
}

/// Reads a single date line verbatim; an empty line yields an empty date.
pub fn read_date(source: &mut impl LineSource) -> io::Result<Option<String>> {
    source.read_line(DATE_PROMPT)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn scripted(text: &str) -> ScriptedInput<Cursor<Vec<u8>>> {
        ScriptedInput::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn prompt_outcome_maps_end_of_input_to_none() {
        assert_eq!(prompt_outcome(Ok("12".into())).unwrap(), Some("12".into()));

        let eof = dialoguer::Error::IO(io::Error::new(io::ErrorKind::UnexpectedEof, "closed"));
        assert_eq!(prompt_outcome(Err(eof)).unwrap(), None);
    }

    #[test]
    fn prompt_outcome_propagates_terminal_failures() {
        let broken = dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        let err = prompt_outcome(Err(broken)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn parse_amount_accepts_non_negative_numbers() {
        assert_eq!(parse_amount("50"), Ok(50.0));
        assert_eq!(parse_amount(" 120.5 "), Ok(120.5));
        assert_eq!(parse_amount("0"), Ok(0.0));
        assert!(parse_amount("-0").unwrap().is_sign_positive());
    }

    #[test]
    fn parse_amount_rejects_bad_input() {
        assert_eq!(
            parse_amount("twelve"),
            Err(AmountError::NotANumber("twelve".into()))
        );
        assert_eq!(parse_amount("-5"), Err(AmountError::Negative(-5.0)));
        assert_eq!(parse_amount("inf"), Err(AmountError::NotFinite));
        assert_eq!(parse_amount("NaN"), Err(AmountError::NotFinite));
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn read_amount_reprompts_until_valid() {
        let mut source = scripted("abc\n-3\n42.5\n");
        assert_eq!(read_amount(&mut source).unwrap(), Some(42.5));
    }

    #[test]
    fn read_amount_stops_at_end_of_input() {
        let mut source = scripted("-1\n");
        assert_eq!(read_amount(&mut source).unwrap(), None);
    }

    #[test]
    fn read_date_keeps_empty_and_verbatim_lines() {
        let mut source = scripted("\n 01/01/2024 \r\n");
        assert_eq!(read_date(&mut source).unwrap(), Some(String::new()));
        assert_eq!(read_date(&mut source).unwrap(), Some(" 01/01/2024 ".into()));
        assert_eq!(read_date(&mut source).unwrap(), None);
    }
}
