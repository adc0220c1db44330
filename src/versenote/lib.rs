//! # Versenote Architecture
//!
//! Versenote looks up Bible passages from the ESV passage text API and keeps a
//! personal interpretation note per verse reference. It is a library with two
//! front ends: a terminal client (the `versenote` binary) and a small local web
//! server. Both sit on the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌───────────────────────────────┐   ┌───────────────────────────────┐
//! │  Terminal shell (cli/, bin)   │   │  Web shell (server/)          │
//! │  args, printing, exit codes   │   │  axum routes, JSON payloads   │
//! └───────────────────────────────┘   └───────────────────────────────┘
//!                 │                                   │
//!                 ▼                                   │
//! ┌───────────────────────────────┐                   │
//! │  API facade (api.rs)          │                   │
//! └───────────────────────────────┘                   │
//!                 │                                   │
//!                 ▼                                   ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                                      │
//! │  input validation, lookup = fetch + note, save/update/delete/list   │
//! └─────────────────────────────────────────────────────────────────────┘
//!                 │                                   │
//!                 ▼                                   ▼
//! ┌───────────────────────────────┐   ┌───────────────────────────────┐
//! │  Verse fetcher (fetch/)       │   │  Note store (store/)          │
//! │  VerseSource trait, EsvClient │   │  NoteStore + backends         │
//! └───────────────────────────────┘   └───────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types. It
//! never prints and never exits the process. Diagnostics go through `tracing`.
//!
//! ## Failure model
//!
//! - A failed passage fetch is a value ([`model::VerseResult::Error`]), not an `Err`.
//! - A missing or corrupt notes file yields an empty store plus a
//!   [`store::LoadReport`]; the session continues.
//! - A failed write returns `Err` but leaves the in-memory store updated, so
//!   retrying is safe.
//!
//! ## Module Overview
//!
//! - [`api`]: facade used by the terminal shell
//! - [`commands`]: business logic for each operation
//! - [`fetch`]: passage source trait and the ESV client
//! - [`store`]: note store and storage backends
//! - [`server`]: web shell
//! - [`model`]: `Note`, `VerseResult`, `Lookup`
//! - [`config`]: configuration file and environment overrides
//! - [`logging`]: tracing subscriber setup
//! - [`clipboard`]: system clipboard support
//! - [`error`]: error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod server;
pub mod store;
