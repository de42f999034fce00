//! Shared code generation pipeline for the stid generator.
//!
//! This crate provides the language-agnostic pieces used by the C# backend
//! (`stid-codegen-csharp`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`pipeline`] - Compilation phases, lints, plugins and diagnostics
//! - [`schema`] - Pre-computed analysis data (ComputedData, ArtifactPlan)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod schema;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
