//! Interactive parameter entry for the bakers.
//!
//! Input is read as whitespace-separated tokens, so `1.5 100` on one line
//! answers two prompts. A bad token throws away the rest of its line.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Shininess;
use crate::error::{BakeError, Result};

const RETRY: &str = "Invalid input; please re-enter.";

/// Buffered token stream over a line reader.
pub struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(input: R) -> Self {
        Self { input, pending: VecDeque::new() }
    }

    fn fill(&mut self, what: &str) -> Result<()>
    {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(BakeError::InvalidInput(format!("input closed while reading {what}")));
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(())
    }

    pub fn next_token(&mut self, what: &str) -> Result<String>
    {
        self.fill(what)?;
        Ok(self.pending.pop_front().unwrap_or_default())
    }

    /// Whatever is left of the current line, or the next non-blank line.
    pub fn rest_of_line(&mut self, what: &str) -> Result<String>
    {
        self.fill(what)?;
        let rest: Vec<String> = self.pending.drain(..).collect();
        Ok(rest.join(" "))
    }

    pub fn discard_line(&mut self)
    {
        self.pending.clear();
    }
}

/// Asks for a non-negative number until one parses.
pub fn prompt_f32<R: BufRead, W: Write>(label: &str, input: &mut Tokens<R>, output: &mut W) -> Result<f32>
{
    loop {
        write!(output, "Insert value for {label}: ")?;
        output.flush()?;
        let token = input.next_token(label)?;
        match token.parse::<f32>() {
            Ok(x) if x.is_finite() && x >= 0.0 => return Ok(x),
            _ => {
                input.discard_line();
                writeln!(output, "{RETRY}")?;
            }
        }
    }
}

pub fn prompt_shininess<R: BufRead, W: Write>(input: &mut Tokens<R>, output: &mut W) -> Result<Shininess>
{
    let nu = prompt_f32("nU", input, output)?;
    let nv = prompt_f32("nV", input, output)?;
    Shininess::validated(nu, nv)
}

pub fn prompt_path<R: BufRead, W: Write>(label: &str, input: &mut Tokens<R>, output: &mut W) -> Result<PathBuf>
{
    write!(output, "Insert path of the {label}: ")?;
    output.flush()?;
    Ok(PathBuf::from(input.rest_of_line(label)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokens(text: &str) -> Tokens<Cursor<&str>> {
        Tokens::new(Cursor::new(text))
    }

    #[test]
    fn reprompts_on_garbage() {
        let mut input = tokens("abc\n-3\n1.5\n100\n");
        let mut output = Vec::new();
        let s = prompt_shininess(&mut input, &mut output).expect("shininess");
        assert_eq!(s, Shininess::new(1.5, 100.0));
        let text = String::from_utf8(output).expect("utf8");
        assert_eq!(text.matches(RETRY).count(), 2);
        assert_eq!(text.matches("Insert value for nU: ").count(), 3);
        assert_eq!(text.matches("Insert value for nV: ").count(), 1);
    }

    #[test]
    fn both_exponents_on_one_line() {
        let mut input = tokens("1.5 100\n");
        let mut output = Vec::new();
        let s = prompt_shininess(&mut input, &mut output).expect("shininess");
        assert_eq!(s, Shininess::new(1.5, 100.0));
        assert!(!String::from_utf8(output).expect("utf8").contains(RETRY));
    }

    #[test]
    fn bad_token_drops_the_rest_of_its_line() {
        let mut input = tokens("x 7\n2\n3\n");
        let mut output = Vec::new();
        let s = prompt_shininess(&mut input, &mut output).expect("shininess");
        assert_eq!(s, Shininess::new(2.0, 3.0));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = tokens("oops\n");
        let mut output = Vec::new();
        let err = prompt_f32("nU", &mut input, &mut output).unwrap_err();
        assert!(matches!(err, BakeError::InvalidInput(_)));
    }

    #[test]
    fn path_skips_blank_lines() {
        let mut input = tokens("\n  textures/normal.jpg  \n");
        let mut output = Vec::new();
        let path = prompt_path("normal map", &mut input, &mut output).expect("path");
        assert_eq!(path, PathBuf::from("textures/normal.jpg"));
    }
}
