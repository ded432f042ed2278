//! Point-set loading from delimited text.
//!
//! The format is one `x,y` pair of signed integers per line. Blank lines are
//! skipped. Loading runs off the UI thread; its single result is handed back
//! through a [`PendingLoad`] and applied with
//! [`PlotEngine::deliver_load`](crate::api::PlotEngine::deliver_load).

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use tracing::{debug, warn};

pub use crate::api::{LoadDelivery, LoadTicket};

use crate::api::PlotEngine;
use crate::core::DataPoint;
use crate::error::{LoadError, PlotResult};
use crate::render::Renderer;

const IN_MEMORY_SOURCE: &str = "<memory>";

/// Parses `x,y` lines from `reader`. `source` only labels read errors.
pub fn parse_points(reader: impl BufRead, source: &Path) -> Result<Vec<DataPoint>, LoadError> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_err| LoadError::Read {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let point = parse_line(trimmed).ok_or_else(|| LoadError::Format {
            line: index + 1,
            content: line.clone(),
        })?;
        points.push(point);
    }
    Ok(points)
}

pub fn parse_points_str(input: &str) -> Result<Vec<DataPoint>, LoadError> {
    parse_points(input.as_bytes(), Path::new(IN_MEMORY_SOURCE))
}

fn parse_line(line: &str) -> Option<DataPoint> {
    let (x, y) = line.split_once(',')?;
    let x = x.trim().parse().ok()?;
    let y = y.trim().parse().ok()?;
    Some(DataPoint::new(x, y))
}

/// Parse-and-cache loader for point files.
///
/// Construct one at startup and share it by `Arc`; there is no global
/// instance.
#[derive(Debug, Default)]
pub struct PointLoader {
    cache: Mutex<HashMap<PathBuf, Arc<[DataPoint]>>>,
}

impl PointLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached points for `path`, reading and parsing on a miss.
    pub fn load(&self, path: &Path) -> Result<Arc<[DataPoint]>, LoadError> {
        if let Some(points) = self.cached(path) {
            debug!(path = %path.display(), "point cache hit");
            return Ok(points);
        }

        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Read {
                path: path.to_path_buf(),
                source: err,
            },
        })?;
        let points: Arc<[DataPoint]> = parse_points(BufReader::new(file), path)?.into();
        debug!(path = %path.display(), count = points.len(), "points loaded");

        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_path_buf(), Arc::clone(&points));
        Ok(points)
    }

    #[must_use]
    pub fn cached(&self, path: &Path) -> Option<Arc<[DataPoint]>> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    pub fn invalidate(&self, path: &Path) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path);
    }

    pub fn clear(&self) {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// A load running on a background thread, delivering exactly once.
#[derive(Debug)]
pub struct PendingLoad {
    ticket: LoadTicket,
    path: PathBuf,
    receiver: Receiver<Result<Vec<DataPoint>, LoadError>>,
    finished: bool,
}

impl PendingLoad {
    #[must_use]
    pub fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Non-blocking check for the result. Returns it at most once.
    pub fn poll(&mut self) -> Option<Result<Vec<DataPoint>, LoadError>> {
        if self.finished {
            return None;
        }
        let result = match self.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(LoadError::Read {
                path: self.path.clone(),
                source: io::Error::other("loader thread ended without a result"),
            }),
        };
        self.finished = true;
        Some(result)
    }

    /// Polls and, once the result is in, hands it to `engine`.
    ///
    /// Returns `None` while the load is still running.
    pub fn deliver_to<R: Renderer>(
        &mut self,
        engine: &mut PlotEngine<R>,
    ) -> Option<PlotResult<LoadDelivery>> {
        let result = self.poll()?;
        Some(engine.deliver_load(self.ticket, result))
    }
}

/// Starts loading `path` on a new thread for the request marked by `ticket`.
pub fn spawn_load(loader: Arc<PointLoader>, path: PathBuf, ticket: LoadTicket) -> PendingLoad {
    let (sender, receiver) = mpsc::sync_channel(1);
    let worker_path = path.clone();
    thread::spawn(move || {
        let result = loader.load(&worker_path).map(|points| points.to_vec());
        if sender.send(result).is_err() {
            warn!(
                path = %worker_path.display(),
                "point load finished after its receiver was dropped"
            );
        }
    });

    PendingLoad {
        ticket,
        path,
        receiver,
        finished: false,
    }
}
