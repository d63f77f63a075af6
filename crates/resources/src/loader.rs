//! Asynchronous asset loading.
//!
//! Each request runs on its own background thread and reports back over a
//! channel; completions are drained on the caller's thread with
//! [`AssetLoader::poll`]. Requests complete independently and in no
//! particular order. There is no cancellation: dropping the loader closes
//! the channel and late results are discarded.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::error::ResourceError;
use crate::model::Model;

/// The result of one load request.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Name given at request time.
    pub name: String,
    /// Path the request was issued for.
    pub path: PathBuf,
    /// The parsed model, or why loading failed.
    pub result: Result<Model, ResourceError>,
}

/// Issues background load requests and collects their outcomes.
#[derive(Debug)]
pub struct AssetLoader {
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
    in_flight: usize,
}

impl AssetLoader {
    /// Create a loader with no requests in flight.
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Start loading `path` in the background.
    ///
    /// The outcome surfaces from a later [`AssetLoader::poll`] call. Any
    /// number of requests may be in flight at once.
    pub fn request(&mut self, name: impl Into<String>, path: PathBuf) {
        let name = name.into();
        let tx = self.tx.clone();
        self.in_flight += 1;

        tracing::info!("Loading '{}' from '{}'", name, path.display());

        thread::spawn(move || {
            let result = Model::load(&path);
            // The receiver may already be gone during teardown.
            let _ = tx.send(LoadOutcome { name, path, result });
        });
    }

    /// Drain all completions that have arrived since the last poll.
    ///
    /// Never blocks; returns an empty vec when nothing has finished.
    pub fn poll(&mut self) -> Vec<LoadOutcome> {
        let outcomes: Vec<LoadOutcome> = self.rx.try_iter().collect();
        self.in_flight -= outcomes.len();
        outcomes
    }

    /// Number of requests issued but not yet drained.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn drain(loader: &mut AssetLoader, count: usize) -> Vec<LoadOutcome> {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut outcomes = Vec::new();
        while outcomes.len() < count {
            assert!(Instant::now() < deadline, "loads did not complete in time");
            outcomes.extend(loader.poll());
            thread::sleep(Duration::from_millis(5));
        }
        outcomes
    }

    #[test]
    fn missing_file_reports_failure_with_path() {
        let mut loader = AssetLoader::new();
        loader.request("car", PathBuf::from("does/not/exist/car.glb"));
        assert_eq!(loader.in_flight(), 1);

        let outcomes = drain(&mut loader, 1);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].name, "car");
        let err = outcomes[0].result.as_ref().unwrap_err();
        assert!(matches!(err, ResourceError::FileNotFound(_)));
        assert!(err.to_string().contains("car.glb"));
        assert_eq!(loader.in_flight(), 0);
    }

    #[test]
    fn concurrent_requests_complete_independently() {
        let mut loader = AssetLoader::new();
        loader.request("track", PathBuf::from("missing/track.glb"));
        loader.request("car", PathBuf::from("missing/car.glb"));
        assert_eq!(loader.in_flight(), 2);

        let outcomes = drain(&mut loader, 2);
        assert_eq!(outcomes.len(), 2);
        let mut names: Vec<&str> = outcomes.iter().map(|o| o.name.as_str()).collect();
        names.sort();
        assert_eq!(names, ["car", "track"]);
        for outcome in &outcomes {
            assert!(outcome.result.is_err());
        }
    }

    #[test]
    fn garbage_file_is_a_gltf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.glb");
        std::fs::write(&path, b"not a gltf file").unwrap();

        let mut loader = AssetLoader::new();
        loader.request("broken", path.clone());
        let outcomes = drain(&mut loader, 1);
        assert!(matches!(
            outcomes[0].result.as_ref().unwrap_err(),
            ResourceError::GltfLoad { .. }
        ));
        assert_eq!(outcomes[0].path, path);
    }
}
