//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "stid.toml")
    }
}

impl Manifest {
    /// Parse a stid.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
///
/// Only structural problems are errors here. Missing values and unknown
/// flags are reported later as pipeline diagnostics.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.push("host")
        .validate_namespace(&manifest.host.marker_namespace)?;

    for (name, base) in &manifest.bases {
        ctx.validate_name(name, "base")?;

        if manifest.types.contains_key(name) {
            return Err(ctx.source_context().validation_error(
                format!("'{}' is declared both as a type and as a base", name),
                ctx.find_span(name),
            ));
        }

        let base_ctx = ctx.push("bases").push(name);
        if let Some(value) = &base.value {
            base_ctx.validate_value_type(value)?;
        }
        if let Some(parent) = &base.base {
            base_ctx.validate_name(parent, "base reference")?;
        }
    }

    for (name, decl) in &manifest.types {
        ctx.validate_name(name, "type")?;

        let type_ctx = ctx.push("types").push(name);
        if let Some(namespace) = &decl.namespace {
            type_ctx.validate_namespace(namespace)?;
        }
        if let Some(value) = &decl.value {
            type_ctx.validate_value_type(value)?;
        }
        if let Some(base) = &decl.base {
            type_ctx.validate_name(base, "base reference")?;
            if base == name {
                return Err(ctx.source_context().validation_error(
                    format!("type '{}' cannot be its own base", name),
                    ctx.find_span(name),
                ));
            }
        }
    }

    Ok(())
}
