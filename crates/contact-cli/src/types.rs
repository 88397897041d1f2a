use std::path::PathBuf;

use contact_map::MappingPlan;

/// Outcome of one `convert` run, rendered by the summary printer.
#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub records: usize,
    pub plan: MappingPlan,
    pub enhancement: EnhancementStatus,
    pub outputs: Vec<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnhancementStatus {
    /// `--enhance` was not passed.
    NotRequested,
    /// The service returned a usable record set.
    Applied,
    /// The service failed; the mapped records were kept unchanged.
    FellBack,
}

impl EnhancementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnhancementStatus::NotRequested => "not requested",
            EnhancementStatus::Applied => "applied",
            EnhancementStatus::FellBack => "failed (kept mapped records)",
        }
    }
}
