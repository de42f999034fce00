//! Compilation pipeline for code generation.
//!
//! The [`Pipeline`] runs the manifest through explicit phases
//! (validate → lower → analyze), calling plugin hooks around each one and
//! collecting diagnostics into a shared [`CompilationContext`].
//!
//! # Example
//!
//! ```ignore
//! use stid_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(manifest)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//!
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
