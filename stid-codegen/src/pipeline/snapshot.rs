//! Pipeline snapshot plugin for visualization and debugging.
//!
//! Captures the pipeline state after each phase so `stid generate --visualize`
//! can dump what every phase produced.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{RwLock, RwLockReadGuard},
};

use eyre::{Result, eyre};
use serde::Serialize;
use stid_ir::GenerationIR;

use super::{CompilationContext, Diagnostic, Plugin};
use crate::schema::ComputedData;

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// Type descriptors (available after "lower").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<GenerationIR>,

    /// Classification and artifact plans (available after "analyze").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<ComputedData>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".stid/debug"));
/// let ctx = pipeline.run(manifest)?;
/// // .stid/debug/validate.json, lower.json, analyze.json
/// ```
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a snapshot plugin that writes `<phase>.json` files as it goes.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Result<Vec<PhaseSnapshot>> {
        Ok(self.read()?.clone())
    }

    /// Write all snapshots to `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        for snapshot in self.read()?.iter() {
            write_snapshot(dir.as_ref(), snapshot)?;
        }
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<PhaseSnapshot>>> {
        self.snapshots
            .read()
            .map_err(|_| eyre!("snapshot store poisoned"))
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(dir.join(format!("{}.json", snapshot.phase)), json)?;
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            ir: ctx.ir.clone(),
            computed: ctx.computed.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .write()
            .map_err(|_| eyre!("snapshot store poisoned"))?
            .push(snapshot);
        Ok(())
    }
}
