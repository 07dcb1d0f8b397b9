//! Rewrite pipeline for stripping TeX markup.
//!
//! The pipeline transforms text through a fixed series of stages:
//! 1. Early cleanup (comments, math symbols, author blocks, literals)
//! 2. Environment handling (transparent openers, quotes, bulk deletion)
//! 3. Command unwrapping (inline formatting, whole-line commands, headings)
//! 4. Residual cleanup (cross-references, leftover commands, braces, blank lines)
//!
//! Order matters: later stages assume earlier ones already ran. For example
//! quotes must be unwrapped before generic environment deletion, and inline
//! commands must be unwrapped before leftover commands are deleted.

mod error;
mod stages;

pub use error::PipelineError;

use stages::{EnvironmentStage, LineCommandStage, RuleStage};

/// A stage in the rewrite pipeline.
///
/// Each stage receives the output of the previous one and returns the
/// rewritten text. Stages never fail: a pattern that does not match leaves
/// the text unchanged.
pub trait Stage: Send + Sync {
    /// Unique name for this stage.
    fn name(&self) -> &'static str;

    /// Rewrite the text.
    fn process(&self, text: String) -> String;
}

/// The rewrite pipeline.
///
/// Holds the stages in the order they run. The default pipeline is the
/// eighteen-stage detex chain; see [`Pipeline::default_pipeline`].
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the default detex pipeline.
    pub fn default_pipeline() -> Result<Self, PipelineError> {
        let mut pipeline = Self::new();
        pipeline
            .add_stage(RuleStage::comments()?)
            .add_stage(RuleStage::symbols()?)
            .add_stage(RuleStage::authors()?)
            .add_stage(RuleStage::file_conditionals()?)
            .add_stage(RuleStage::literals()?)
            .add_stage(RuleStage::openers()?)
            .add_stage(RuleStage::quotes()?)
            .add_stage(EnvironmentStage::new()?)
            .add_stage(RuleStage::examples()?)
            .add_stage(RuleStage::inline()?)
            .add_stage(LineCommandStage::new()?)
            .add_stage(RuleStage::sections()?)
            .add_stage(RuleStage::short_titles()?)
            .add_stage(RuleStage::cross_references()?)
            .add_stage(RuleStage::commands_with_arguments()?)
            .add_stage(RuleStage::commands()?)
            .add_stage(RuleStage::stray_braces()?)
            .add_stage(RuleStage::whitespace()?);
        Ok(pipeline)
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Run every stage over the text, in order.
    pub fn run(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |text, stage| {
                let before = text.len();
                let text = stage.process(text);
                if text.len() != before {
                    tracing::trace!(stage = stage.name(), before, after = text.len(), "stage rewrote text");
                }
                text
            })
    }

    /// Get the names of all stages in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
