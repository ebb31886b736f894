//! Optimization pass framework.
//!
//! This module provides the infrastructure for transforming programs
//! through a series of passes driven to a fixed point:
//!
//! - **[`Pass`]**: a named, level-gated tree-to-tree transformation with
//!   statistics output
//! - **[`OptimizationPipeline`]**: runs registered passes in order until an
//!   iteration performs no more than the convergence threshold of
//!   transformations, or the iteration cap is reached
//! - **[`PassStats`] / [`PipelineStats`]**: additive counters; pipeline
//!   totals are the elementwise sum of every pass run
//!
//! Passes must be deterministic and idempotent at fixed point: running a
//! converged pass again performs zero transformations.

pub mod dce;
pub mod fold;
mod identity;
pub mod sugar;

pub use dce::{DeadCodeConfig, DeadCodeEliminationPass};
pub use fold::{ConstantFoldingConfig, ConstantFoldingPass};
pub use sugar::{SyntaxSugarConfig, SyntaxSugarRemovalPass};

use std::time::{Duration, Instant};

use crate::ast::Program;
use crate::diag::DiagnosticBag;
use crate::error::{PassError, PipelineError};
use crate::validate;

/// Optimization levels, totally ordered.
///
/// Each pass declares the minimum level at which it runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptLevel {
    /// Run no passes
    None,
    /// Cheap, semantics-preserving cleanups only
    Basic,
    /// The standard pass set
    #[default]
    Default,
    /// Everything, including the second folding round
    Aggressive,
}

/// Counters one pass run produces.
///
/// `elapsed` carries wall time and is deliberately excluded from equality:
/// two identical runs must compare equal even though their timings differ.
#[derive(Debug, Clone, Default)]
pub struct PassStats {
    /// Nodes the pass inspected
    pub nodes_visited: u64,
    /// Nodes the pass rewrote or removed
    pub nodes_transformed: u64,
    /// Expressions replaced by a computed literal
    pub constants_folded: u64,
    /// Statements removed as dead code
    pub dead_code_removed: u64,
    /// Sugar constructs lowered
    pub sugar_removed: u64,
    /// Wall time spent in the pass
    pub elapsed: Duration,
}

impl PassStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds another run's counters into this one.
    pub fn merge(&mut self, other: &PassStats) {
        self.nodes_visited += other.nodes_visited;
        self.nodes_transformed += other.nodes_transformed;
        self.constants_folded += other.constants_folded;
        self.dead_code_removed += other.dead_code_removed;
        self.sugar_removed += other.sugar_removed;
        self.elapsed += other.elapsed;
    }
}

impl PartialEq for PassStats {
    fn eq(&self, other: &Self) -> bool {
        self.nodes_visited == other.nodes_visited
            && self.nodes_transformed == other.nodes_transformed
            && self.constants_folded == other.constants_folded
            && self.dead_code_removed == other.dead_code_removed
            && self.sugar_removed == other.sugar_removed
    }
}

/// Accumulated statistics of one `optimize` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    /// Elementwise sum of every pass run
    pub totals: PassStats,
    /// Per-pass sums, in registration order (empty when stats are disabled)
    pub per_pass: Vec<(String, PassStats)>,
    /// Outer iterations performed
    pub iterations: u32,
}

impl PipelineStats {
    fn record(&mut self, pass_name: &str, run: &PassStats, per_pass_enabled: bool) {
        self.totals.merge(run);
        if per_pass_enabled {
            match self.per_pass.iter_mut().find(|(name, _)| name == pass_name) {
                Some((_, stats)) => stats.merge(run),
                None => self.per_pass.push((pass_name.to_string(), run.clone())),
            }
        }
    }
}

/// Configuration for the pipeline driver.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Level gate applied to every registered pass
    pub level: OptLevel,
    /// Whether per-pass statistics and timings are collected
    pub stats_enabled: bool,
    /// Upper bound on outer iterations (at least 1)
    pub max_iterations: u32,
    /// An iteration performing no more than this many transformations ends
    /// the run
    pub convergence_threshold: u64,
    /// Abort when entry validation reports errors
    pub stop_on_validator_error: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            level: OptLevel::Default,
            stats_enabled: true,
            max_iterations: 5,
            convergence_threshold: 1,
            stop_on_validator_error: false,
        }
    }
}

/// A single optimization pass.
pub trait Pass {
    /// Stable name used in statistics and errors.
    fn name(&self) -> &'static str;

    /// The minimum level at which the pass runs.
    fn min_level(&self) -> OptLevel;

    /// Level gate; the default compares against [`Pass::min_level`].
    fn should_apply(&self, level: OptLevel) -> bool {
        level >= self.min_level()
    }

    /// Transforms the program in place, reporting counters.
    ///
    /// Recoverable findings go into `diagnostics`; returning an error
    /// aborts the whole pipeline run.
    fn apply(
        &mut self,
        program: &mut Program,
        diagnostics: &mut DiagnosticBag,
    ) -> Result<PassStats, PassError>;
}

/// An ordered collection of passes driven to fixed point.
///
/// # Example
///
/// ```rust
/// use vela_ast::ast::Program;
/// use vela_ast::transform::{OptimizationPipeline, PipelineConfig};
/// use vela_ast::Span;
///
/// let mut program = Program::new(Span::dummy());
/// let mut pipeline = OptimizationPipeline::with_default_passes(PipelineConfig::default());
/// let stats = pipeline.optimize(&mut program).unwrap();
/// assert_eq!(stats.totals.nodes_transformed, 0);
/// ```
pub struct OptimizationPipeline {
    passes: Vec<Box<dyn Pass>>,
    config: PipelineConfig,
    diagnostics: DiagnosticBag,
    stats: PipelineStats,
}

impl OptimizationPipeline {
    /// Creates an empty pipeline.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            passes: Vec::new(),
            config,
            diagnostics: DiagnosticBag::new(),
            stats: PipelineStats::default(),
        }
    }

    /// Creates a pipeline with the standard pass set: constant folding,
    /// sugar removal, dead-code elimination, and a second folding round at
    /// [`OptLevel::Aggressive`].
    pub fn with_default_passes(config: PipelineConfig) -> Self {
        let aggressive = config.level >= OptLevel::Aggressive;
        let mut pipeline = Self::new(config);
        pipeline.add_pass(ConstantFoldingPass::new(ConstantFoldingConfig::default()));
        pipeline.add_pass(SyntaxSugarRemovalPass::new(SyntaxSugarConfig::default()));
        pipeline.add_pass(DeadCodeEliminationPass::new(DeadCodeConfig::default()));
        if aggressive {
            pipeline.add_pass(ConstantFoldingPass::new(ConstantFoldingConfig::default()));
        }
        pipeline
    }

    /// Registers a pass at the end of the run order.
    pub fn add_pass<P: Pass + 'static>(&mut self, pass: P) -> &mut Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Changes the optimization level for subsequent runs.
    pub fn set_level(&mut self, level: OptLevel) {
        self.config.level = level;
    }

    /// Enables or disables per-pass statistics collection.
    pub fn set_stats_enabled(&mut self, enabled: bool) {
        self.config.stats_enabled = enabled;
    }

    /// Diagnostics accumulated across runs.
    pub fn diagnostics(&self) -> &DiagnosticBag {
        &self.diagnostics
    }

    /// Statistics of the most recent run, also readable after a failed run.
    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    /// Runs every level-eligible pass to fixed point.
    ///
    /// Validation runs once at entry; findings land in the diagnostic bag
    /// and abort the run only under
    /// [`stop_on_validator_error`](PipelineConfig::stop_on_validator_error).
    /// On pass failure the tree keeps all mutations applied so far and the
    /// accumulated statistics stay readable through [`Self::stats`].
    pub fn optimize(&mut self, program: &mut Program) -> Result<PipelineStats, PipelineError> {
        self.stats = PipelineStats::default();

        let validation = validate::validate(program);
        let entry_errors = validation.error_count();
        self.diagnostics.extend(validation.diagnostics);
        if self.config.stop_on_validator_error && entry_errors > 0 {
            return Err(PipelineError::ValidationFailed {
                errors: entry_errors,
            });
        }

        let max_iterations = self.config.max_iterations.max(1);
        for _ in 0..max_iterations {
            self.stats.iterations += 1;
            let mut iteration_transforms = 0u64;

            for pass in &mut self.passes {
                if !pass.should_apply(self.config.level) {
                    continue;
                }
                let started = Instant::now();
                let mut run = pass.apply(program, &mut self.diagnostics)?;
                if self.config.stats_enabled {
                    run.elapsed = started.elapsed();
                }
                iteration_transforms += run.nodes_transformed;
                self.stats
                    .record(pass.name(), &run, self.config.stats_enabled);
            }

            if iteration_transforms <= self.config.convergence_threshold {
                break;
            }
        }

        Ok(self.stats.clone())
    }
}
