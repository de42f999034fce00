// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `stid.toml` manifests.
//!
//! The manifest stands in for the host compilation: it lists the marked
//! identifier declarations, their base types, and what the host already
//! provides.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    BaseDecl, HostConfig, Manifest, ParseContext, StidToml, TypeDecl, ValueLookup,
    parse_manifest,
};
