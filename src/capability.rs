use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Operation names the re-encoding workflow requires on every
/// video-handling component.
pub const OP_INITIALIZE_VIDEO_CAPTURE: &str = "initialize_video_capture";
pub const OP_RE_ENCODE_VIDEO: &str = "re_encode_video";

pub const REQUIRED_OPERATIONS: [&str; 2] = [OP_INITIALIZE_VIDEO_CAPTURE, OP_RE_ENCODE_VIDEO];

/// Contract every video-handling component must satisfy before the
/// pipeline will accept it. Conformance is checked by the compiler;
/// the structural check below only reports what a component declares.
pub trait VideoPipeline {
    /// Open a capture on `source` and make the handle ready for frame reads.
    fn initialize_video_capture(&mut self, source: &Path) -> Result<()>;

    /// Re-encode `source` into a playable codec, recording where the
    /// result lives. Must be idempotent per source: a second call for a
    /// source that was already re-encoded is a no-op.
    fn re_encode_video(&mut self, source: &Path, target: &Path) -> Result<PathBuf>;
}

/// What a component reports about itself for diagnostics.
pub trait Diagnosable {
    fn component_name(&self) -> &'static str;

    /// Operation names this component declares. The structural check
    /// compares this list against `REQUIRED_OPERATIONS`.
    fn operations(&self) -> Vec<&'static str>;
}

/// Outcome for one (component, operation) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    pub component: &'static str,
    pub operation: &'static str,
    pub present: bool,
}

/// Structural capability check: a fixed operation list applied to each
/// component under inspection. Overall result is the AND across all
/// (component, operation) pairs.
pub struct StructuralCheck {
    required: Vec<&'static str>,
}

impl Default for StructuralCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralCheck {
    pub fn new() -> Self {
        Self {
            required: REQUIRED_OPERATIONS.to_vec(),
        }
    }

    pub fn check(&self, component: &dyn Diagnosable) -> Vec<PairOutcome> {
        let declared = component.operations();
        self.required
            .iter()
            .map(|&op| PairOutcome {
                component: component.component_name(),
                operation: op,
                present: declared.contains(&op),
            })
            .collect()
    }

    pub fn check_all(&self, components: &[&dyn Diagnosable]) -> Vec<PairOutcome> {
        components
            .iter()
            .flat_map(|c| self.check(*c))
            .collect()
    }
}

pub fn all_present(outcomes: &[PairOutcome]) -> bool {
    outcomes.iter().all(|o| o.present)
}
