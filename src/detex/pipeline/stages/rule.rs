//! Regex rule stages.

use regex::Regex;

use super::tables::{
    INLINE_COMMANDS, LITERALS, QUOTE_ENVIRONMENTS, REFERENCE_NOUNS, TRANSPARENT_ENVIRONMENTS,
};
use super::compile;
use crate::detex::pipeline::{PipelineError, Stage};

/// A single substitution: every match of `pattern` is replaced with
/// `replacement` (which may refer to capture groups as `${1}`).
struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    fn apply(&self, text: String) -> String {
        self.pattern
            .replace_all(&text, self.replacement.as_str())
            .into_owned()
    }
}

/// Stage that applies an ordered list of regex rules.
///
/// Rules run one after another over the whole text, so a later rule sees the
/// output of the earlier ones.
pub struct RuleStage {
    name: &'static str,
    rules: Vec<Rule>,
}

impl RuleStage {
    /// Create a stage from (pattern, replacement) pairs.
    pub fn new<I, P, R>(name: &'static str, rules: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: Into<String>,
    {
        let rules = rules
            .into_iter()
            .map(|(pattern, replacement)| -> Result<Rule, PipelineError> {
                Ok(Rule {
                    pattern: compile(name, pattern.as_ref())?,
                    replacement: replacement.into(),
                })
            })
            .collect::<Result<Vec<_>, PipelineError>>()?;
        Ok(Self { name, rules })
    }

    /// Create a stage with a single rule.
    pub fn single(
        name: &'static str,
        pattern: &str,
        replacement: &str,
    ) -> Result<Self, PipelineError> {
        Self::new(name, [(pattern, replacement)])
    }

    /// Delete from an unescaped `%` to the end of the line.
    ///
    /// A `%` is escaped only behind an odd run of backslashes; `\\%` is a
    /// line break followed by a comment.
    pub fn comments() -> Result<Self, PipelineError> {
        Self::single("comments", r"(?m)((?:^|[^\\])(?:\\\\)*)%.*", "${1}")
    }

    /// Drop math-mode delimiters: `$`, `\(` and `\)`.
    pub fn symbols() -> Result<Self, PipelineError> {
        Self::single("symbols", r"\$|\\\(|\\\)", "")
    }

    /// Drop `\author{...}` including chained `\affiliation{...}` blocks.
    pub fn authors() -> Result<Self, PipelineError> {
        Self::single(
            "authors",
            r"(?s)\\author\{.*?(\\affiliation\{.*?\}.*?)*\}",
            "",
        )
    }

    pub fn file_conditionals() -> Result<Self, PipelineError> {
        Self::single("file-conditionals", r"(?s)\\IfFileExists\{.*?\}\{\}", "")
    }

    pub fn literals() -> Result<Self, PipelineError> {
        Self::new("literals", LITERALS.iter().copied())
    }

    /// Drop the opening marker of transparent environments (`document` etc.)
    /// so their content is not consumed by environment deletion.
    pub fn openers() -> Result<Self, PipelineError> {
        Self::new(
            "openers",
            TRANSPARENT_ENVIRONMENTS
                .iter()
                .map(|env| (format!(r"\\begin\{{{}\}}", regex::escape(env)), "")),
        )
    }

    /// Keep quoted text, discard the quote markers.
    pub fn quotes() -> Result<Self, PipelineError> {
        Self::new(
            "quotes",
            QUOTE_ENVIRONMENTS.iter().map(|env| {
                let env = regex::escape(env);
                (
                    format!(r"(?s)\\begin\{{{env}\}}(.*?)\\end ?\{{{env}\}}"),
                    "${1}",
                )
            }),
        )
    }

    /// Delete gb4e linguistic examples (`\ea ... \z`).
    pub fn examples() -> Result<Self, PipelineError> {
        Self::single("examples", r"(?s)\\ea.*?\\z", "")
    }

    /// Replace inline formatting commands with their argument.
    pub fn inline() -> Result<Self, PipelineError> {
        Self::new(
            "inline",
            INLINE_COMMANDS
                .iter()
                .map(|com| (format!(r"\\{}\{{(.*?)\}}", regex::escape(com)), "${1}")),
        )
    }

    /// `\section{T}`, `\subsection*{T}`, ... become `T` on its own paragraph.
    pub fn sections() -> Result<Self, PipelineError> {
        Self::single("sections", r"\\[sub]*section\*?\{(.*?)\}", "\n\n${1}\n")
    }

    pub fn short_titles() -> Result<Self, PipelineError> {
        Self::single("short-titles", r"(?s)\\title\[(.*?)\]", "${1}")
    }

    /// Delete "Figure~\ref{...}" style phrases entirely.
    pub fn cross_references() -> Result<Self, PipelineError> {
        Self::new(
            "cross-references",
            REFERENCE_NOUNS.iter().map(|noun| {
                (
                    format!(r"(?i){}[ ~]\\[a-z]*ref\{{.*?\}}", regex::escape(noun)),
                    "",
                )
            }),
        )
    }

    /// Delete `\command[opt]{arg1}{arg2}...`.
    pub fn commands_with_arguments() -> Result<Self, PipelineError> {
        Self::single(
            "commands-with-arguments",
            r"(?i)\\[a-z]+(\[.*?\])?(\{.*?\})+",
            "",
        )
    }

    /// Delete bare `\command` tokens.
    pub fn commands() -> Result<Self, PipelineError> {
        Self::single("commands", r"(?i)\\[a-z]+", "")
    }

    /// Replace braces and brackets left alone at a line boundary with a space.
    pub fn stray_braces() -> Result<Self, PipelineError> {
        Self::single("stray-braces", r"\n[ \t]*[{}\]]|[\]}{]\n", " ")
    }

    pub fn whitespace() -> Result<Self, PipelineError> {
        Self::single("whitespace", r"\n\n\n", "\n")
    }
}

impl Stage for RuleStage {
    fn name(&self) -> &'static str {
        self.name
    }

    fn process(&self, text: String) -> String {
        self.rules.iter().fold(text, |text, rule| rule.apply(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(stage: RuleStage, input: &str) -> String {
        stage.process(input.to_string())
    }

    #[test]
    fn test_comments_keep_text_before_marker() {
        let out = run(RuleStage::comments().unwrap(), "keep this % drop this\nnext line");
        assert_eq!(out, "keep this \nnext line");
    }

    #[test]
    fn test_comments_whole_line() {
        let out = run(RuleStage::comments().unwrap(), "% header\nbody\n%% more\nend");
        assert_eq!(out, "\nbody\n\nend");
    }

    #[test]
    fn test_comments_ignore_escaped_percent() {
        let out = run(RuleStage::comments().unwrap(), "grew by 50\\% last year % note");
        assert_eq!(out, "grew by 50\\% last year ");
    }

    #[test]
    fn test_comments_after_line_break() {
        let out = run(RuleStage::comments().unwrap(), "a & b\\\\% row note\nnext");
        assert_eq!(out, "a & b\\\\\nnext");

        let out = run(RuleStage::comments().unwrap(), "x \\\\\\% kept % dropped");
        assert_eq!(out, "x \\\\\\% kept ");
    }

    #[test]
    fn test_symbols() {
        let out = run(RuleStage::symbols().unwrap(), "where $x$ and \\(y\\) hold");
        assert_eq!(out, "where x and y hold");
    }

    #[test]
    fn test_authors_with_affiliations() {
        let input = "\\author{Jane Doe\n\\affiliation{Uni A}\nand John\n\\affiliation{Uni B}}\nText";
        let out = run(RuleStage::authors().unwrap(), input);
        assert_eq!(out, "\nText");
    }

    #[test]
    fn test_authors_plain() {
        let out = run(RuleStage::authors().unwrap(), "\\author{Jane Doe} rest");
        assert_eq!(out, " rest");
    }

    #[test]
    fn test_file_conditionals() {
        let input = "a\\IfFileExists{\nlocal.cfg}{}b";
        assert_eq!(run(RuleStage::file_conditionals().unwrap(), input), "ab");
    }

    #[test]
    fn test_literals() {
        let out = run(RuleStage::literals().unwrap(), "well\\hyp{}known caf\\'e");
        assert_eq!(out, "well-known café");
    }

    #[test]
    fn test_openers_only_drop_begin_marker() {
        let input = "\\begin{document}\\begin{otherlanguage}Hallo\\end{otherlanguage}";
        let out = run(RuleStage::openers().unwrap(), input);
        assert_eq!(out, "Hallo\\end{otherlanguage}");
    }

    #[test]
    fn test_quotes_keep_content() {
        let input = "\\begin{quote}To be\nor not\\end {quote} and \\begin{quotation}x\\end{quotation}";
        let out = run(RuleStage::quotes().unwrap(), input);
        assert_eq!(out, "To be\nor not and x");
    }

    #[test]
    fn test_examples() {
        let input = "before \\ea\n\\gll a b\\\\\n\\z after";
        assert_eq!(run(RuleStage::examples().unwrap(), input), "before  after");
    }

    #[test]
    fn test_inline_unwraps_commands() {
        let input = "\\textbf{bold} \\emph{stress} \\footnote{note}";
        assert_eq!(run(RuleStage::inline().unwrap(), input), "bold stress note");
    }

    #[test]
    fn test_inline_nested_in_order() {
        // textbf runs before emph, so the inner command is unwrapped first
        let input = "\\emph{very \\textbf{bold}}";
        assert_eq!(run(RuleStage::inline().unwrap(), input), "very bold");
    }

    #[test]
    fn test_sections() {
        let input = "\\section{Intro}text\\subsection*{Scope}more\\subsubsection{Deep}";
        let out = run(RuleStage::sections().unwrap(), input);
        assert_eq!(out, "\n\nIntro\ntext\n\nScope\nmore\n\nDeep\n");
    }

    #[test]
    fn test_short_titles() {
        let input = "\\title[Short\nform]";
        assert_eq!(run(RuleStage::short_titles().unwrap(), input), "Short\nform");
    }

    #[test]
    fn test_cross_references() {
        let input = "as Figure~\\ref{fig:a} and sections \\autoref{s:b} and table \\cref{t} show";
        let out = run(RuleStage::cross_references().unwrap(), input);
        assert_eq!(out, "as  and  and  show");
    }

    #[test]
    fn test_commands_with_arguments() {
        let input = "see \\cite[p.~3]{knuth} and \\href{url}{text} now";
        let out = run(RuleStage::commands_with_arguments().unwrap(), input);
        assert_eq!(out, "see  and  now");
    }

    #[test]
    fn test_bare_commands() {
        let out = run(RuleStage::commands().unwrap(), "\\noindent Text \\LaTeX\\ rocks");
        assert_eq!(out, " Text \\ rocks");
    }

    #[test]
    fn test_stray_braces() {
        let out = run(RuleStage::stray_braces().unwrap(), "line\n  }rest\nend}\nnext");
        assert_eq!(out, "line rest\nend next");
    }

    #[test]
    fn test_whitespace() {
        let out = run(RuleStage::whitespace().unwrap(), "a\n\n\nb\n\nc");
        assert_eq!(out, "a\nb\n\nc");
    }

    #[test]
    fn test_invalid_pattern_names_stage() {
        let err = RuleStage::single("broken", r"(", "").err().unwrap();
        assert!(err.to_string().contains("broken"));
    }
}
