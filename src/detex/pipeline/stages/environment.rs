//! Generic environment deletion.

use regex::Regex;

use super::compile;
use crate::detex::pipeline::{PipelineError, Stage};

const NAME: &str = "environments";

/// Stage that deletes `\begin{NAME} ... \end{NAME}` blocks with their content.
///
/// Floats, bibliographies and display math all end up here. Pairing is a
/// two-phase scan: find an opening marker, then look for the nearest closing
/// marker whose name matches case-insensitively (`\end {NAME}` with a single
/// space is accepted too). An opener without a matching closer is left in
/// place and the scan resumes just past it.
pub struct EnvironmentStage {
    begin: Regex,
    end: Regex,
}

impl EnvironmentStage {
    pub fn new() -> Result<Self, PipelineError> {
        Ok(Self {
            begin: compile(NAME, r"(?i)\\begin\{([a-z]+)\}")?,
            end: compile(NAME, r"(?i)\\end ?\{([a-z]+)\}")?,
        })
    }

    /// Byte offset just past the nearest closer named `name` at or after `from`.
    fn closing_end(&self, text: &str, from: usize, name: &str) -> Option<usize> {
        self.end.captures_iter(&text[from..]).find_map(|caps| {
            let close = caps.get(0)?;
            let close_name = caps.get(1)?;
            close_name
                .as_str()
                .eq_ignore_ascii_case(name)
                .then(|| from + close.end())
        })
    }
}

impl Stage for EnvironmentStage {
    fn name(&self) -> &'static str {
        NAME
    }

    fn process(&self, text: String) -> String {
        let mut out = String::with_capacity(text.len());
        let mut copied = 0;
        let mut search = 0;

        while let Some(caps) = self.begin.captures_at(&text, search) {
            let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
                break;
            };

            match self.closing_end(&text, open.end(), name.as_str()) {
                Some(close_end) => {
                    out.push_str(&text[copied..open.start()]);
                    copied = close_end;
                    search = close_end;
                }
                // `\` is a single byte, so this stays on a char boundary
                None => search = open.start() + 1,
            }
        }

        if copied == 0 {
            return text;
        }
        out.push_str(&text[copied..]);
        out
    }
}
