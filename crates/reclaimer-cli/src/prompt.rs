//! Line-oriented prompting with defaults.
//!
//! Every question has a default. An empty answer, an answer that does not
//! parse, and end of input all select it, so a script of blank lines runs
//! the whole session.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::PromptError;

/// Asks questions on `output` and reads answers from `input`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input and an output stream.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and return the output stream.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line. End of input reads as an
    /// empty answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_owned())
    }

    /// Ask for a value, falling back to `default` when the answer is empty
    /// or does not parse.
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str, default: T) -> Result<T, PromptError> {
        let answer = self.ask(prompt)?;
        Ok(answer.parse().unwrap_or(default))
    }

    /// Ask for free text, falling back to `default` when the answer is
    /// empty.
    pub fn ask_text(&mut self, prompt: &str, default: &str) -> Result<String, PromptError> {
        let answer = self.ask(prompt)?;
        if answer.is_empty() {
            Ok(default.to_owned())
        } else {
            Ok(answer)
        }
    }

    /// Ask a yes/no question. Accepts `y`, `yes`, `s`, `si` and `sí` as yes
    /// and `n`, `no` as no, in any case; anything else is `default`.
    pub fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(match answer.as_str() {
            "y" | "yes" | "s" | "si" | "sí" => true,
            "n" | "no" => false,
            _ => default,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_trims_and_echoes_prompt() {
        let mut p = prompter("  42 \n");
        let answer = p.ask("Crew: ").ok();
        assert_eq!(answer.as_deref(), Some("42"));
        assert_eq!(String::from_utf8(p.into_output()).ok().as_deref(), Some("Crew: "));
    }

    #[test]
    fn parsed_answers_fall_back_on_blank_or_garbage() {
        let mut p = prompter("12\n\nabc\n");
        assert_eq!(p.ask_parsed("a", 8_u32).ok(), Some(12));
        assert_eq!(p.ask_parsed("b", 8_u32).ok(), Some(8));
        assert_eq!(p.ask_parsed("c", 365_u32).ok(), Some(365));
    }

    #[test]
    fn end_of_input_selects_defaults() {
        let mut p = prompter("");
        assert_eq!(p.ask_parsed("a", 1.45_f64).ok(), Some(1.45));
        assert_eq!(p.ask_text("b", "CustomContainer").ok().as_deref(), Some("CustomContainer"));
        assert_eq!(p.confirm("c", true).ok(), Some(true));
    }

    #[test]
    fn confirm_accepts_both_languages() {
        let mut p = prompter("s\nY\nno\nmaybe\n");
        assert_eq!(p.confirm("1", false).ok(), Some(true));
        assert_eq!(p.confirm("2", false).ok(), Some(true));
        assert_eq!(p.confirm("3", true).ok(), Some(false));
        assert_eq!(p.confirm("4", true).ok(), Some(true));
    }

    #[test]
    fn negative_numbers_do_not_parse_as_unsigned() {
        let mut p = prompter("-3\n");
        assert_eq!(p.ask_parsed("crew", 8_u32).ok(), Some(8));
    }
}
