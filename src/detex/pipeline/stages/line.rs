//! Whole-line command unwrapping.

use regex::Regex;

use super::compile;
use super::tables::LINE_COMMANDS;
use crate::detex::pipeline::{PipelineError, Stage};

const NAME: &str = "lines";

/// Stage that unwraps commands whose argument is a whole semantic unit
/// (`\title`, `\abstract`, `\caption`, `\chapter`).
///
/// `\chapter*{Some {nested} text}` becomes `"\nSome {nested} text "`. The
/// argument runs to the last `}` on the same line so nested braces are not
/// cut short; the trailing space is normalized by later stages. Nesting
/// that spans lines or closes earlier on the line is not handled.
pub struct LineCommandStage {
    openers: Vec<Regex>,
}

impl LineCommandStage {
    pub fn new() -> Result<Self, PipelineError> {
        let openers = LINE_COMMANDS
            .iter()
            .map(|com| compile(NAME, &format!(r"\\{}\*?\{{", regex::escape(com))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { openers })
    }
}

/// Apply one opener pattern over the whole text.
fn unwrap_lines(opener: &Regex, text: String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(open) = opener.find_at(&text, search) {
        let arg_start = open.end();
        let line_end = text[arg_start..]
            .find('\n')
            .map_or(text.len(), |i| arg_start + i);

        match text[arg_start..line_end].rfind('}') {
            Some(i) => {
                let close = arg_start + i;
                out.push_str(&text[copied..open.start()]);
                out.push('\n');
                out.push_str(&text[arg_start..close]);
                out.push(' ');
                copied = close + 1;
                search = copied;
            }
            None => search = open.start() + 1,
        }
    }

    if copied == 0 {
        return text;
    }
    out.push_str(&text[copied..]);
    out
}

impl Stage for LineCommandStage {
    fn name(&self) -> &'static str {
        NAME
    }

    fn process(&self, text: String) -> String {
        self.openers
            .iter()
            .fold(text, |text, opener| unwrap_lines(opener, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        LineCommandStage::new().unwrap().process(input.to_string())
    }

    #[test]
    fn test_title() {
        assert_eq!(run("\\title{A Study}\nbody"), "\nA Study \nbody");
    }

    #[test]
    fn test_starred_chapter() {
        assert_eq!(run("\\chapter*{Preface}"), "\nPreface ");
    }

    #[test]
    fn test_keeps_nested_braces() {
        assert_eq!(
            run("\\caption{The {LaTeX} way}\n"),
            "\nThe {LaTeX} way \n"
        );
    }

    #[test]
    fn test_runs_to_last_brace_on_line() {
        // Known limitation: a later brace on the same line is swallowed
        assert_eq!(run("\\title{A} and {b}"), "\nA} and {b ");
    }

    #[test]
    fn test_double_closing_brace() {
        assert_eq!(run("\\abstract{Short \\emph{x}}\n"), "\nShort \\emph{x} \n");
    }

    #[test]
    fn test_unclosed_argument_is_left_alone() {
        let input = "\\title{Broken\n}";
        assert_eq!(run(input), input);
    }

    #[test]
    fn test_multiple_commands() {
        let input = "\\title{T}\n\\chapter{C}\n";
        assert_eq!(run(input), "\nT \n\nC \n");
    }

    #[test]
    fn test_other_commands_untouched() {
        let input = "\\titlepage{x}";
        assert_eq!(run(input), input);
    }
}
