//! # Cliente Certo Architecture
//!
//! Cliente Certo is a **UI-agnostic client registry library**. The CLI binary is
//! just one client of it; the same core could sit behind any other front end.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the single store adapter instance                   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and business logic                            │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond the store it is handed         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract KeyValueStore trait                             │
//! │  - FileStore (production), MemoryStore (testing)            │
//! │  - ClientStore: record serialization over either backend    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Beneath everything sit two pure modules with no storage dependency at all:
//! [`cpf`] (tax-id checksum and display mask) and [`currency`] (cents-accumulator
//! input formatting and decimal parsing).
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (the purge confirmation prompt is the
//!   one deliberate exception, and it is bypassable)
//! - **Never** calls `std::process::exit`
//!
//! ## Records Are Write-Once
//!
//! A client record moves `nonexistent → persisted → nonexistent`. There is no
//! update-in-place: a record is registered, listed, and eventually removed,
//! individually or in bulk.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Client` record and id generation
//! - [`cpf`]: Tax-id (CPF) checksum validation and display mask
//! - [`currency`]: Monetary input formatting and parsing
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod cpf;
pub mod currency;
pub mod error;
pub mod model;
pub mod store;
