//! # EduGhana Architecture
//!
//! EduGhana is a **UI-agnostic catalog library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client. The same core could sit behind the web
//! portal, a TUI, or a bot.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, cli/, wired by main.rs)                │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (raw selections → ids, kind strings)   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per listing surface                        │
//! │  - Applies filter criteria, resolves labels                 │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Provider Layer (store/)                                    │
//! │  - Abstract ContentProvider trait                           │
//! │  - HttpProvider (live API), FileProvider (snapshot),        │
//! │    MemoryProvider (built-in catalog, testing)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Underneath the commands sits the pure core: `filter` (the faceted
//! search/filter engine every listing shares) and `facet` (id→label
//! lookup for foreign keys). Neither performs I/O or holds state.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never touches stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal.
//!
//! Authentication follows the same discipline: a [`session::Session`]
//! value is passed to the provider that needs it. Nothing reads tokens
//! from ambient storage.
//!
//! ## Testing Strategy
//!
//! 1. **Filter core** (`filter.rs`, `facet.rs`): property-style unit tests
//!    (order preservation, vacuous facets, AND semantics, normalization).
//! 2. **Commands** (`commands/*.rs`): behavior tests against
//!    `MemoryProvider` fixtures. The lion's share of testing lives here
//!    and in the core.
//! 3. **API** (`api.rs`): dispatch and input-normalization tests.
//! 4. **CLI**: integration tests in `tests/` drive the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: One module per portal operation
//! - [`store`]: Provider abstraction and implementations
//! - [`filter`]: The faceted filter engine
//! - [`facet`]: Id→label indexes for reference collections
//! - [`model`]: Catalog record types
//! - [`session`]: Explicit authentication state
//! - [`config`]: CLI configuration
//! - [`error`]: Error types
//! - `cli`: Printing and styling for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod facet;
pub mod filter;
pub mod model;
pub mod session;
pub mod store;
