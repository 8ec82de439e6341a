//! Test doubles for the Hyprland socket

use std::cell::RefCell;
use std::io::{Read, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tempfile::TempDir;

use super::{HyprError, Transport};

type Responder = Box<dyn Fn(&str) -> String + Send + 'static>;

/// In-memory transport that records every payload and answers from a closure
pub struct RecordingTransport {
    requests: RefCell<Vec<String>>,
    respond: Box<dyn Fn(&str) -> Result<String, HyprError>>,
}

impl RecordingTransport {
    pub fn new(respond: impl Fn(&str) -> String + 'static) -> Self {
        Self::fallible(move |payload| Ok(respond(payload)))
    }

    pub fn fallible(respond: impl Fn(&str) -> Result<String, HyprError> + 'static) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn clear(&self) {
        self.requests.borrow_mut().clear();
    }
}

impl std::fmt::Debug for RecordingTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingTransport")
            .field("requests", &self.requests)
            .finish_non_exhaustive()
    }
}

impl Transport for RecordingTransport {
    fn request(&self, payload: &str) -> Result<String, HyprError> {
        self.requests.borrow_mut().push(payload.to_string());
        (self.respond)(payload)
    }
}

/// A minimal stand-in for the Hyprland control socket
///
/// Accepts one connection at a time, reads a single request, writes the
/// responder's reply and closes the connection.
pub struct FakeHyprland {
    _dir: TempDir,
    socket_path: PathBuf,
    requests: Arc<Mutex<Vec<String>>>,
    connections: Arc<AtomicUsize>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FakeHyprland {
    pub fn start(respond: impl Fn(&str) -> String + Send + 'static) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let socket_path = dir.path().join(".socket.sock");
        let listener = UnixListener::bind(&socket_path).expect("Failed to bind fake socket");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let connections = Arc::new(AtomicUsize::new(0));
        let stop = Arc::new(AtomicBool::new(false));
        let respond: Responder = Box::new(respond);

        let handle = {
            let requests = Arc::clone(&requests);
            let connections = Arc::clone(&connections);
            let stop = Arc::clone(&stop);
            std::thread::spawn(move || {
                for stream in listener.incoming() {
                    if stop.load(Ordering::SeqCst) {
                        break;
                    }
                    let Ok(mut stream) = stream else { continue };
                    connections.fetch_add(1, Ordering::SeqCst);

                    let mut buf = [0u8; 8192];
                    let n = stream.read(&mut buf).unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]).into_owned();
                    let reply = respond(&request);
                    requests.lock().unwrap().push(request);

                    // Peer may already be gone for fire-and-forget writes
                    let _ = stream.write_all(reply.as_bytes());
                }
            })
        };

        Self {
            _dir: dir,
            socket_path,
            requests,
            connections,
            stop,
            handle: Some(handle),
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Drop for FakeHyprland {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        // Wake the accept loop so it observes the stop flag
        let _ = UnixStream::connect(&self.socket_path);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
