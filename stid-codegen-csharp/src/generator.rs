use std::path::Path;

use eyre::Result;
use stid_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
    schema::ComputedType,
};
use stid_core::{GeneratedFile, WriteResult};
use stid_ir::HostInfo;

use crate::files::{MarkerAttribute, PartialCs, SupportCs};

/// C# code generator producing strongly typed identifier support files.
///
/// When the marker attribute is not yet visible to the host, a run emits the
/// marker definition and nothing else.
pub struct Generator {
    host: HostInfo,
    types: Vec<ComputedType>,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "g.cs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .into_iter()
            .map(|file| PreviewFile {
                path: file.file_name(),
                content: file.render(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult {
            bootstrap_only: self.is_bootstrap(),
            ..Default::default()
        };

        for file in self.files() {
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(file.file_name()),
                WriteResult::Unchanged => result.unchanged.push(file.file_name()),
            }
        }

        Ok(result)
    }
}

impl Generator {
    pub fn new(host: HostInfo, types: Vec<ComputedType>) -> Self {
        Self { host, types }
    }

    /// Build a generator from a completed pipeline run.
    ///
    /// # Errors
    ///
    /// Fails if the lower or analyze phase has not run.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        let ir = ctx.take_ir()?;
        let computed = ctx.take_computed()?;
        Ok(Self::new(ir.host, computed.types))
    }

    pub fn is_bootstrap(&self) -> bool {
        !self.host.marker_visible
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        if self.is_bootstrap() {
            return vec![Box::new(MarkerAttribute::new(&self.host.marker_namespace))];
        }

        self.types.iter().flat_map(type_files).collect()
    }
}

fn type_files(ty: &ComputedType) -> [Box<dyn GeneratedFile + '_>; 2] {
    [
        Box::new(SupportCs::new(&ty.descriptor, ty.category)),
        Box::new(PartialCs::new(&ty.descriptor, ty.category)),
    ]
}
