//! # Noteful Server
//!
//! The `noteful` binary is intentionally thin: `main.rs` only calls [`cli::run`] and
//! turns errors into an exit code. This crate holds everything that knows about
//! HTTP, while the notes themselves are handled by the UI-agnostic `notefulapp`
//! library.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Bootstrap (cli/, logging.rs)                               │
//! │  - clap flags layered over config.json                      │
//! │  - flexi_logger setup, seed loading, server bind            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/)                                         │
//! │  - tiny_http loop → ApiRequest → route table → handler      │
//! │  - Status-code mapping for every NotefulError               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  notefulapp::api::NotefulApi<S: NoteStore>                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Handlers and router**: unit tests drive [`http::App`] with in-memory
//!   [`http::request::ApiRequest`] values; no sockets involved.
//! - **Server**: `tests/server_e2e.rs` binds port 0 and talks raw HTTP over TCP.
//! - **Binary**: `tests/cli.rs` runs the built executable with `assert_cmd`.

pub mod cli;
pub mod http;
pub mod logging;
