//! Internationalization: supported languages and translation metrics.
//!
//! - `registry`: the fixed set of posting/display languages
//! - `language`: validated `Language` handle onto the registry
//! - `metrics`: counters for cache and translation API activity
//! - `strings`: localized apply-form strings
//!
//! ```rust,ignore
//! use agri_job_board::i18n::{Language, LanguageRegistry};
//!
//! let hindi = Language::from_name("Hindi")?;
//! let selectable = LanguageRegistry::get().list_enabled();
//! ```

mod language;
mod metrics;
mod registry;
mod strings;

pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::ApplyFormStrings;
