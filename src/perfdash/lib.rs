//! # Perfdash Architecture
//!
//! Perfdash is a **UI-agnostic employee performance dashboard library**. It loads
//! a team from a users API, attaches a department and a 1-5 rating to each
//! person, and answers three kinds of question about the result: who matches
//! these criteria, who have I bookmarked, and how is the team doing overall.
//! The terminal client in `cli/` is one consumer of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, runs the shell session │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the source, the bookmark store and the snapshot     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Filter engine, aggregation engine, bookmark operations   │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Sources (source/)           │ │  Bookmarks (store/)        │
//! │  - EmployeeSource trait      │ │  - BookmarkStore trait     │
//! │  - HTTP, file, static        │ │  - in-memory, shared       │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! Source → snapshot → filter / aggregation → view. The collection is fetched
//! once per session and treated as immutable afterwards. Bookmarks are
//! side-state: they reference employees by id, survive a refresh, and are
//! simply skipped when an id no longer resolves.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Network access is confined to
//! [`source::http::HttpSource`]; file access to [`source::file::FileSource`]
//! and [`config`].
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of the engines.
//! 2. **API** (`api.rs`): dispatch, id parsing and snapshot caching, run
//!    against [`source::memory::StaticSource`].
//! 3. **CLI** (`cli/` + `tests/`): shell parsing, rendering, and end-to-end
//!    runs of the binary against a fixture file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Filter and aggregation engines plus per-command logic
//! - [`source`]: Employee sources and metadata assignment
//! - [`store`]: Bookmark storage
//! - [`model`]: Core data types (`Employee`, `Department`, `Rating`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering and the shell for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod store;
