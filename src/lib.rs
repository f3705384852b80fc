//! Multi-language farm job board.
//!
//! Postings are stored in the language they were written in and shown in the
//! viewer's display language. Missing translations are fetched concurrently in
//! the background; until one lands the posting is shown in its native text.

pub mod application;
pub mod board;
pub mod cache;
pub mod config;
pub mod coordinator;
pub mod filter;
pub mod i18n;
pub mod retry;
pub mod server;
pub mod store;
pub mod translator;
pub mod view;

pub use board::{BoardView, JobBoard};
pub use translator::{GeminiTranslator, JobTranslator};
