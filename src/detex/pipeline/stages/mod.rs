//! Default pipeline stages.
//!
//! Most stages are ordered tables of regex rules ([`RuleStage`]). Two need a
//! scan the regex engine cannot express on its own:
//!
//! 1. **EnvironmentStage** - pairs `\begin{NAME}` with the nearest `\end{NAME}`
//!    of the same name (the engine has no backreferences)
//! 2. **LineCommandStage** - unwraps whole-line commands up to the last closing
//!    brace on the line (the engine has no lookahead)

mod environment;
mod line;
mod rule;
mod tables;

pub use environment::EnvironmentStage;
pub use line::LineCommandStage;
pub use rule::RuleStage;

use regex::Regex;

use super::PipelineError;

/// Compile a pattern, attributing failures to the owning stage.
fn compile(stage: &'static str, pattern: &str) -> Result<Regex, PipelineError> {
    Regex::new(pattern).map_err(|e| PipelineError::pattern(stage, e))
}
