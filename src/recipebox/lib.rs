//! # Recipebox Architecture
//!
//! Recipebox is a **UI-agnostic recipe library**. The terminal shell in this
//! crate is one client of it; the same core could sit behind a web page or a
//! desktop window.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads shell lines, formats output, handles terminal I/O  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the Session              │
//! │  - Normalizes inputs (indexes → UUIDs)                      │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: listing, drafts, commit, status     │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract RecipeStore trait (ordered collection)          │
//! │  - InMemoryStore: lives as long as the session              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Drafts
//!
//! Recipes are never edited directly. Adding or editing opens a [`model::Draft`],
//! a working copy that is mutated field by field and then either committed
//! (validated, cleaned, written to the store) or discarded. One draft can be
//! open per session; opening another replaces it.
//!
//! ## The Assistant
//!
//! [`chat`] is a separate toy: canned keyword replies behind a simulated delay.
//! It shares no state with the recipe side.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: Core data types (`Recipe`, `Draft`, status flags and filters)
//! - [`session`]: Per-session view state and the open draft
//! - [`index`]: Display indexing (the `1`, `2`, `3` the shell uses)
//! - [`config`]: Configuration management
//! - [`chat`]: The cooking assistant
//! - [`error`]: Error types

pub mod api;
pub mod chat;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod session;
pub mod store;
