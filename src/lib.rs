//! # verse-search
//!
//! A small HTTP service that answers free-text questions with the most
//! relevant verses from an annotated verse collection (translation, themes,
//! keywords, context note per verse).
//!
//! ## Ranking
//!
//! ```text
//!                    ┌──────────────┐
//!                    │  User Query  │
//!                    └──────┬───────┘
//!               ┌───────────┴────────────┐
//!               ▼                        ▼
//!     ┌───────────────────┐    ┌───────────────────┐
//!     │ Keyword overlap   │    │ Query embedding   │
//!     │ distinct hits per │    │ cosine vs. every  │
//!     │ verse, ÷ max      │    │ verse embedding   │
//!     └─────────┬─────────┘    └─────────┬─────────┘
//!               │ ×0.3                   │ ×0.7
//!               └───────────┬────────────┘
//!                           ▼
//!                 ┌───────────────────┐
//!                 │ Top 3, score > 0.1│
//!                 └─────────┬─────────┘
//!                           ▼
//!                 ┌───────────────────┐
//!                 │ Reply text + JSON │
//!                 └───────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for server, dataset, and embeddings
//! - [`models`] - `Entry` (one verse) and request/response types
//! - [`corpus`] - Dataset discovery and loading
//! - [`embedding`] - `EmbeddingProvider` trait with hash and HTTP implementations
//! - [`search::keywords`] - Stop-word filtered keyword extraction
//! - [`search::vector`] - Embedding matrix and cosine similarity
//! - [`search::hybrid`] - Keyword/semantic score fusion and top-k selection
//! - [`search::format`] - Human-readable and structured rendering of results
//! - [`state`] - Search index and shared application state
//! - [`api`] - Axum handlers and router

pub mod api;
pub mod config;
pub mod corpus;
pub mod embedding;
pub mod error;
pub mod models;
pub mod search;
pub mod state;
