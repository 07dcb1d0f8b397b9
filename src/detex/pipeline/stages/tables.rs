//! Command and environment tables.
//!
//! Order within each table is significant and matches the order the rules
//! are applied in.

/// Environments whose opening marker is dropped so their body survives
/// generic environment deletion.
pub const TRANSPARENT_ENVIRONMENTS: &[&str] =
    &["document", "otherlanguage", "refcontext", "refsection"];

/// Environments whose body is kept while the markers are discarded.
pub const QUOTE_ENVIRONMENTS: &[&str] = &["quote", "quotation"];

/// Single-argument commands replaced by their argument.
///
/// Smaller-scope commands come first. `\il` and `\is` are left out since
/// unwrapping them would repeat the indexed keyword.
pub const INLINE_COMMANDS: &[&str] = &[
    "textbf", "textsc", "textit", "textrm", "ili", "isi", "emph", "enquote", "footnote",
];

/// Commands whose argument is a whole semantic unit, placed on its own line.
pub const LINE_COMMANDS: &[&str] = &["title", "abstract", "caption", "chapter"];

/// Nouns that introduce a cross-reference ("see Figure~\ref{...}").
pub const REFERENCE_NOUNS: &[&str] = &[
    "section", "sections", "figure", "figures", "table", "tables",
];

/// Fixed literal substitutions: (pattern, replacement).
pub const LITERALS: &[(&str, &str)] = &[(r"\\hyp\{\}", "-"), (r"\\'e", "é")];
