//! Analyze phase - classifies descriptors and plans their artifacts.

use eyre::{Result, eyre};

use crate::{
    pipeline::{CompilationContext, Phase},
    schema::ComputedData,
};

/// Phase that classifies every descriptor and decides which sections each
/// artifact gets.
///
/// Must run after `LowerPhase`.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Classify underlying types and plan artifact sections"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = ctx
            .ir
            .as_ref()
            .ok_or_else(|| eyre!("IR not set - AnalyzePhase must run after LowerPhase"))?;

        ctx.computed = Some(ComputedData::from_ir(ir, &ctx.manifest));
        Ok(())
    }
}
