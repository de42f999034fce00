//! Generate operation - C# support files from the manifest.

use std::path::Path;

use eyre::{Context, Result};
use stid_codegen::{
    pipeline::{Pipeline, Severity, SnapshotPlugin},
    schema::{DisplayStyle, PlanDisplay},
};
use stid_codegen_csharp::{Generator, LanguageCodegen};
use stid_manifest::Manifest;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the `.g.cs` files are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output debug snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the manifest and emits the artifacts of every type,
/// or only the marker attribute when the host does not provide it yet.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let debug_dir = opts.output_dir.join(".stid/debug");

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let ctx = pipeline.run(manifest.clone()).wrap_err("Pipeline failed")?;

    let warnings: Vec<String> = ctx
        .diagnostics
        .iter()
        .filter(|d| matches!(d.severity, Severity::Warning))
        .map(|d| d.message.clone())
        .collect();

    let computed = ctx
        .computed
        .as_ref()
        .ok_or_else(|| eyre::eyre!("ComputedData not set - did AnalyzePhase run?"))?;
    let type_count = computed.types.len();
    let type_table = PlanDisplay::new(computed)
        .style(DisplayStyle::Simple)
        .to_string();

    let generator = Generator::from_context(ctx)?;
    let bootstrap_only = generator.is_bootstrap();

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let gen_result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate code")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: gen_result.written,
            unchanged: gen_result.unchanged,
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        warnings,
        bootstrap_only,
        type_count,
        type_table,
        result,
    })
}
