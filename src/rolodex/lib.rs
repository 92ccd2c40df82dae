//! # Rolodex Architecture
//!
//! Rolodex keeps contacts (name, phones, birthday) and free-form tagged notes, and
//! stores both as JSON. Like any good CLI tool it is a library first: the binary is
//! one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, REPL loop, colored output, logger setup    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and both aggregates for the session       │
//! │  - Thin dispatch to commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validates raw arguments into value objects               │
//! │  - Runs one aggregate operation, then saves (write-after-   │
//! │    mutate), returns a structured CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (fields, record, address_book, note, notebook)        │
//! │  - Invariants and queries, no I/O, no logging               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore port over raw JSON documents                   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions
//!
//! Notes are addressed by 1-based positions everywhere (commands, results, display).
//! Positions are re-derived after every removal; they are not stable ids.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One function per user command
//! - [`fields`]: `PersonName`, `PhoneNumber`, `Birthday` and their validation
//! - [`record`], [`address_book`]: contacts and the birthday-window query
//! - [`note`], [`notebook`]: notes, tags and note search
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod address_book;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod note;
pub mod notebook;
pub mod record;
pub mod store;
