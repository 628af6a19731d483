//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student roster library**. The `roster` binary is
//! one client of it; the same core could sit behind a web page or a desktop
//! window.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, validates drafts, asks for confirmation│
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the opened roster, dispatches to commands           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Upsert, remove, reset, query, classes, export, view      │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RosterStore: the record list, persisted as one snapshot  │
//! │  - KeyValueStore trait: FileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never prompts,
//! and never calls `std::process::exit`. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `StudentRecord`, `StudentDraft`, `Status`, `SortField`
//! - [`collate`]: Human-friendly string ordering for views
//! - [`demo`]: The fixed demo dataset
//! - [`config`]: Configuration management
//! - [`avatar`]: Embedding image files as data URLs
//! - [`logging`]: Subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod avatar;
pub mod collate;
pub mod commands;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
