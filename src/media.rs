//! Background media probing.
//!
//! A single worker thread owned by the [`MediaLoader`] probes files in
//! request order and reports back over a channel. The scene drains the
//! channel on its own schedule and only ever updates a node's aspect ratio
//! from it, so a slow or failed load never blocks interaction. Dropping the
//! loader closes the job queue and joins the worker.

use crate::error::{CanvasError, CanvasResult};
use crate::types::{ContentDescriptor, NodeId};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// URL prefix under which the content listing serves media files
const FILES_PREFIX: &str = "/files/";

#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Media finished loading with the given width / height ratio
    Loaded { node: NodeId, aspect_ratio: f64 },
    /// Media could not be probed; the node keeps its current ratio
    Failed { node: NodeId, reason: String },
}

/// Read an image's header and return its width / height ratio.
pub fn probe_aspect_ratio(path: &Path) -> CanvasResult<f64> {
    let (width, height) = image::image_dimensions(path).map_err(|source| CanvasError::Media {
        path: path.to_path_buf(),
        source,
    })?;
    if width == 0 || height == 0 {
        return Ok(1.0);
    }
    Ok(width as f64 / height as f64)
}

struct ProbeJob {
    node: NodeId,
    path: PathBuf,
}

pub struct MediaLoader {
    root: PathBuf,
    /// `None` once the loader is shutting down
    jobs: Option<Sender<ProbeJob>>,
    events: Receiver<MediaEvent>,
    worker: Option<JoinHandle<()>>,
}

impl MediaLoader {
    /// Start the probe worker. Media paths are resolved relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> CanvasResult<Self> {
        let (jobs, job_rx) = mpsc::channel::<ProbeJob>();
        let (event_tx, events) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("media-probe".into())
            .spawn(move || {
                for ProbeJob { node, path } in job_rx {
                    let event = match probe_aspect_ratio(&path) {
                        Ok(aspect_ratio) => MediaEvent::Loaded { node, aspect_ratio },
                        Err(e) => {
                            warn!("{e}");
                            MediaEvent::Failed {
                                node,
                                reason: e.to_string(),
                            }
                        }
                    };
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
                debug!("media worker stopped");
            })?;

        Ok(Self {
            root: root.into(),
            jobs: Some(jobs),
            events,
            worker: Some(worker),
        })
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        let relative = path
            .strip_prefix(FILES_PREFIX)
            .unwrap_or_else(|| path.trim_start_matches('/'));
        self.root.join(relative)
    }

    /// Queue the media behind `descriptor` for probing. Returns `false` for
    /// content types without probeable dimensions.
    pub fn request(&self, node: NodeId, descriptor: &ContentDescriptor) -> bool {
        if !descriptor.content_type.is_image() {
            return false;
        }
        let Some(jobs) = &self.jobs else {
            return false;
        };

        let path = self.resolve(&descriptor.path);
        debug!(%node, path = %path.display(), "queueing media probe");
        jobs.send(ProbeJob { node, path }).is_ok()
    }

    /// Completed probes, without blocking.
    pub fn drain(&self) -> Vec<MediaEvent> {
        self.events.try_iter().collect()
    }

    /// Block until the next probe completes. Intended for tests and
    /// headless tooling, never for the interactive path.
    pub fn wait(&self) -> Option<MediaEvent> {
        self.events.recv().ok()
    }
}

impl Drop for MediaLoader {
    fn drop(&mut self) {
        // Closing the queue ends the worker's loop once pending jobs finish.
        self.jobs.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("media worker panicked");
            }
        }
    }
}
