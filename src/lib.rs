// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]

//! # Saviynt Provider Core
//!
//! Shared toolkit behind the Saviynt Terraform provider's resource handlers:
//! value translation, platform version compatibility, plan-time structural
//! validation, a structured error taxonomy and deterministic JSON.
//!
//! ## Features
//!
//! - **Translation**: Bidirectional maps between configuration labels and API codes
//! - **Version Compatibility**: Plan-time errors for attributes a release does not support
//! - **Validation**: Cross-field rules (exactly-one-of, conditional requirement, bounds, counts)
//! - **Error Taxonomy**: `{PREFIX}_{CATEGORY}{SEQUENCE}` codes, standard messages, redaction
//! - **Deterministic JSON**: Sorted-key encoding for stable plan/state comparison
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use saviynt_provider_core::{load_resource_check, Result};
//!
//! fn main() -> Result<()> {
//!     let check = load_resource_check("connection.yaml")?;
//!     let diags = check.check(Some("25.Amsterdam"));
//!     for diag in &diags {
//!         println!("{diag}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Resource Handlers                           │
//! │  plan-time validation → Diagnostics    API failure → StandardError│
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌────────────┬────────────┬────┴───────┬─────────────┬───────────┐
//! │ Translate  │  Compat    │  Validate  │  Taxonomy   │ Canonical │
//! ├────────────┼────────────┼────────────┼─────────────┼───────────┤
//! │ Role types │ Versions   │ ExactlyOne │ Codes       │ Sorted    │
//! │ Risk levels│ Matrix     │ Conditional│ Categories  │ keys      │
//! │ Attr types │ Checker    │ Bounds     │ Sanitize    │ Normalize │
//! │ Owners     │            │ Counts     │ Context     │           │
//! └────────────┴────────────┴────────────┴─────────────┴───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the provider core
pub mod error;

/// Common types and type aliases
pub mod types;

/// Diagnostics (severity, summary, detail)
pub mod diag;

/// Value translation tables
pub mod translate;

/// Platform version compatibility
pub mod compat;

/// Plan-time structural validation
pub mod validate;

/// Error codes, standard errors and operation context
pub mod taxonomy;

/// Deterministic JSON encoding
pub mod canonical;

/// Resource-check documents
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_resource_check, load_resource_check_from_str, ResourceCheck};
pub use diag::{Diagnostic, Diagnostics, Severity};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
