//! # Web Shell
//!
//! A small axum server exposing the same operations as the terminal shell:
//!
//! - `GET /` serves the static page
//! - `GET /lookup?reference=<ref>` fetches the passage and attaches the note
//! - `POST /save_interpretation` with `{ reference, interpretation }`
//! - `POST /delete_interpretation` with `{ reference }`
//! - `GET /interpretations` lists saved notes
//!
//! The store is loaded once at startup and shared behind a mutex, so
//! concurrent saves are serialized instead of racing on the file. The lock is
//! never held across the outbound passage request.

use crate::error::{Result, VerseError};
use crate::fetch::VerseSource;
use crate::store::{NoteStore, StorageBackend};
use axum::Router;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use tracing::info;

pub mod controllers;
pub mod errors;
pub mod routes;

pub struct AppState<B: StorageBackend> {
    pub notes: Arc<Mutex<NoteStore<B>>>,
    pub source: Arc<dyn VerseSource>,
}

// Manual impl: deriving would require `B: Clone`
impl<B: StorageBackend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            notes: Arc::clone(&self.notes),
            source: Arc::clone(&self.source),
        }
    }
}

impl<B: StorageBackend> AppState<B> {
    pub fn new(store: NoteStore<B>, source: Arc<dyn VerseSource>) -> Self {
        Self {
            notes: Arc::new(Mutex::new(store)),
            source,
        }
    }

    /// Run `f` with exclusive access to the store.
    pub fn with_notes<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut NoteStore<B>) -> Result<T>,
    {
        let mut store = self
            .notes
            .lock()
            .map_err(|_| VerseError::Store("note store lock poisoned".to_string()))?;
        f(&mut store)
    }
}

pub fn app<B>(state: AppState<B>) -> Router
where
    B: StorageBackend + Send + 'static,
{
    routes::get_routes().with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve<B>(state: AppState<B>, addr: SocketAddr) -> Result<()>
where
    B: StorageBackend + Send + 'static,
{
    let listener = TcpListener::bind(addr).map_err(VerseError::Io)?;
    let local = listener.local_addr().map_err(VerseError::Io)?;
    info!("listening on http://{}", local);

    axum::Server::from_tcp(listener)
        .map_err(|e| VerseError::Http(e.to_string()))?
        .serve(app(state).into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(|e| VerseError::Http(e.to_string()))
}
