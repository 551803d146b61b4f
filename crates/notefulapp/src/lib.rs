//! # Noteful Architecture
//!
//! Notefulapp is the **UI-agnostic core** of noteful. The HTTP server in the `noteful`
//! crate is one client of this library; nothing in here knows about sockets, status
//! codes or JSON response envelopes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (crates/noteful)                                │
//! │  - Route table, handlers, status-code mapping               │
//! │  - The ONLY place that knows about requests and responses   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the store                               │
//! │  - Normalizes inputs (path segments → NoteIds)              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract NoteStore trait                                 │
//! │  - InMemoryStore, seeded from the embedded dataset          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<Note>`, `Result<Vec<Note>>`)
//! - **Never** writes to stdout/stderr
//! - **Never** assumes an HTTP transport
//!
//! Not-found is modelled as `Option::None` at the store level. The API facade is where
//! absence becomes [`error::NotefulError::NoteNotFound`] for callers that must report it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all note operations
//! - [`store`]: Storage abstraction, in-memory implementation and seed dataset
//! - [`model`]: Core data types (`Note`, `NoteId`, `NoteDraft`)
//! - [`config`]: Configuration loading and validation
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
