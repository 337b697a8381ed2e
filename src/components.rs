use std::path::{Path, PathBuf};

use crate::capability::{
    Diagnosable, VideoPipeline, OP_INITIALIZE_VIDEO_CAPTURE, OP_RE_ENCODE_VIDEO,
};
use crate::errors::Result;

/// Record of a completed codec-fallback re-encode.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReencodeRecord {
    source: PathBuf,
    target: PathBuf,
}

/// Backend pipeline handle. Created detached so diagnostics can inspect
/// its surface without touching any video file; the re-encode gate
/// guarantees a source is transcoded at most once per handle lifetime.
#[derive(Debug, Default)]
pub struct ExtractorCore {
    capture: Option<PathBuf>,
    re_encoded: Option<ReencodeRecord>,
}

impl ExtractorCore {
    /// Allocation-only handle for structural inspection.
    pub fn detached() -> Self {
        Self {
            capture: None,
            re_encoded: None,
        }
    }

    pub fn is_detached(&self) -> bool {
        self.capture.is_none()
    }

    /// True until a fallback re-encode has been recorded for `source`.
    pub fn needs_re_encode(&self, source: &Path) -> bool {
        !matches!(&self.re_encoded, Some(r) if r.source == source)
    }

    /// The file processing should read: the recorded re-encode target if
    /// one exists for `source`, otherwise `source` itself.
    pub fn processing_input<'a>(&'a self, source: &'a Path) -> &'a Path {
        match &self.re_encoded {
            Some(r) if r.source == source => &r.target,
            _ => source,
        }
    }
}

impl VideoPipeline for ExtractorCore {
    fn initialize_video_capture(&mut self, source: &Path) -> Result<()> {
        // Processing must pick up an earlier fallback re-encode, never
        // trigger a new one.
        let input = self.processing_input(source).to_path_buf();
        tracing::debug!(component = self.component_name(), input = %input.display(),
            "initializing video capture");
        self.capture = Some(input);
        Ok(())
    }

    fn re_encode_video(&mut self, source: &Path, target: &Path) -> Result<PathBuf> {
        if let Some(record) = &self.re_encoded {
            if record.source == source {
                tracing::debug!(component = self.component_name(),
                    target = %record.target.display(),
                    "re-encode already recorded, reusing target");
                return Ok(record.target.clone());
            }
        }
        tracing::debug!(component = self.component_name(),
            source = %source.display(), target = %target.display(),
            "recording codec-fallback re-encode");
        self.re_encoded = Some(ReencodeRecord {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
        });
        Ok(target.to_path_buf())
    }
}

impl Diagnosable for ExtractorCore {
    fn component_name(&self) -> &'static str {
        "extractor-core"
    }

    fn operations(&self) -> Vec<&'static str> {
        vec![OP_INITIALIZE_VIDEO_CAPTURE, OP_RE_ENCODE_VIDEO]
    }
}

/// User-facing controller. Owns an [`ExtractorCore`] and forwards the
/// pipeline operations to it, so the file re-encoded when the user opened
/// it is the same file the run step later processes.
#[derive(Debug, Default)]
pub struct FrontendController {
    core: ExtractorCore,
}

impl FrontendController {
    pub fn detached() -> Self {
        Self {
            core: ExtractorCore::detached(),
        }
    }

    pub fn is_detached(&self) -> bool {
        self.core.is_detached()
    }

    pub fn needs_re_encode(&self, source: &Path) -> bool {
        self.core.needs_re_encode(source)
    }

    pub fn processing_input<'a>(&'a self, source: &'a Path) -> &'a Path {
        self.core.processing_input(source)
    }
}

impl VideoPipeline for FrontendController {
    fn initialize_video_capture(&mut self, source: &Path) -> Result<()> {
        self.core.initialize_video_capture(source)
    }

    fn re_encode_video(&mut self, source: &Path, target: &Path) -> Result<PathBuf> {
        self.core.re_encode_video(source, target)
    }
}

impl Diagnosable for FrontendController {
    fn component_name(&self) -> &'static str {
        "frontend-controller"
    }

    fn operations(&self) -> Vec<&'static str> {
        vec![OP_INITIALIZE_VIDEO_CAPTURE, OP_RE_ENCODE_VIDEO]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detached_handle_touches_nothing() {
        let core = ExtractorCore::detached();
        assert!(core.is_detached());
        assert!(core.needs_re_encode(Path::new("clip.mp4")));
    }

    #[test]
    fn re_encode_happens_once_per_source() {
        let mut core = ExtractorCore::detached();
        let source = PathBuf::from("clip_av1.mp4");
        let target = PathBuf::from("clip_av1_reencoded.mp4");

        let first = core.re_encode_video(&source, &target).unwrap();
        assert_eq!(first, target);
        assert!(!core.needs_re_encode(&source));

        // Second trigger must reuse the recorded target, even if the
        // caller proposes a different one.
        let second = core
            .re_encode_video(&source, Path::new("other.mp4"))
            .unwrap();
        assert_eq!(second, target);
    }

    #[test]
    fn capture_init_picks_up_recorded_re_encode() {
        let mut core = ExtractorCore::detached();
        let source = PathBuf::from("clip_av1.mp4");
        let target = PathBuf::from("clip_av1_reencoded.mp4");

        core.re_encode_video(&source, &target).unwrap();
        core.initialize_video_capture(&source).unwrap();
        assert!(!core.is_detached());
        assert_eq!(core.processing_input(&source), target.as_path());
    }

    #[test]
    fn frontend_forwards_gate_to_core() {
        let mut gui = FrontendController::detached();
        let source = PathBuf::from("clip.mp4");
        let target = PathBuf::from("clip_reencoded.mp4");

        gui.re_encode_video(&source, &target).unwrap();
        assert!(!gui.needs_re_encode(&source));
        gui.initialize_video_capture(&source).unwrap();
        assert_eq!(gui.processing_input(&source), target.as_path());
    }
}
