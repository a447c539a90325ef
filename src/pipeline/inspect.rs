// Inspect channel — request/response between a triggering context and the
// CV core.
//
// The core reads surfaces that are only valid on the thread that parsed
// them, so a dedicated blocking worker owns the SurfaceSource. Each request
// makes the worker load a fresh surface, run extract + classify without
// yielding, and send the Inspection back on a oneshot. The caller owns the
// timeout; the worker never cancels mid-read.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::cv::{self, Inspection};
use crate::surface::html::HtmlSurface;
use crate::surface::memory::MemorySurface;
use crate::surface::traits::TextSurface;

/// Default time a caller waits for an inspection.
pub const DEFAULT_INSPECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Somewhere a fresh editor surface can be loaded from.
///
/// `load` runs on the inspect worker; the surface it returns never leaves
/// that thread, so it does not need to be `Send`.
pub trait SurfaceSource: Send + 'static {
    fn load(&self) -> Result<Box<dyn TextSurface>>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// A saved editor page (`.html`) or a bare LaTeX file (`.tex`) on disk.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_plain_tex(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tex"))
    }
}

impl SurfaceSource for SnapshotFile {
    fn load(&self) -> Result<Box<dyn TextSurface>> {
        if self.is_plain_tex() {
            let text = std::fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read {}", self.path.display()))?;
            return Ok(Box::new(MemorySurface::from_text(&text)));
        }
        Ok(Box::new(HtmlSurface::from_file(&self.path)?))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

impl SurfaceSource for MemorySurface {
    fn load(&self) -> Result<Box<dyn TextSurface>> {
        Ok(Box::new(self.clone()))
    }

    fn describe(&self) -> String {
        "in-memory surface".to_string()
    }
}

struct InspectRequest {
    reply: oneshot::Sender<Result<Inspection>>,
}

/// Handle for asking the inspect worker to run. Cheap to clone; the worker
/// stops once every handle is dropped.
#[derive(Clone)]
pub struct InspectorHandle {
    tx: mpsc::Sender<InspectRequest>,
}

/// Start an inspect worker for `source`. Must be called inside a Tokio
/// runtime.
pub fn spawn_inspector<S: SurfaceSource>(source: S) -> InspectorHandle {
    let (tx, mut rx) = mpsc::channel::<InspectRequest>(8);

    tokio::task::spawn_blocking(move || {
        let name = source.describe();
        debug!(source = %name, "Inspect worker started");
        while let Some(request) = rx.blocking_recv() {
            let outcome = source.load().map(|surface| cv::inspect(surface.as_ref()));
            match &outcome {
                Ok(inspection) => info!(
                    source = %name,
                    found = inspection.extraction.found,
                    is_cv = inspection.classification.is_cv,
                    "Inspection complete"
                ),
                Err(e) => warn!(source = %name, error = %e, "Failed to load editor surface"),
            }
            // The requester may already have timed out and gone away.
            let _ = request.reply.send(outcome);
        }
        debug!(source = %name, "Inspect worker stopped");
    });

    InspectorHandle { tx }
}

impl InspectorHandle {
    /// Ask the worker for an inspection and wait up to `timeout` for it.
    pub async fn inspect(&self, timeout: Duration) -> Result<Inspection> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(InspectRequest { reply })
            .await
            .map_err(|_| anyhow!("Inspect worker is no longer running"))?;

        match tokio::time::timeout(timeout, response).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => anyhow::bail!("Inspect worker dropped the request without replying"),
            Err(_) => anyhow::bail!(
                "Timed out after {:.1}s waiting for the editor content",
                timeout.as_secs_f64()
            ),
        }
    }
}
