//! Ferret Core - shared data model for ferret's diagnostics.
//!
//! Every ferret pipeline is a stateless transformation, and this crate
//! holds the value types flowing between them:
//!
//! - [`AnalysisResult`] and [`Finding`]: log classification output
//! - [`ScanNode`], [`ScanSummary`] and [`ScanReport`]: codebase scan output
//! - [`BuildResult`] and [`BuildError`]: build probe output
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   ferret-cli    │  (logs / build / scan / report)
//! └────────┬────────┘
//!          │
//!    ┌─────┼──────────────┬───────────────┐
//!    ▼     ▼              ▼               ▼
//! rule-engine  ferret-probe  ferret-scan  ferret-deps
//!    │            │            │   │          │
//!    └────────────┴─────┬──────┘   └─ ferret-fs
//!                       ▼
//!              ┌─────────────────┐
//!              │   ferret-core   │  (this crate)
//!              └─────────────────┘
//! ```

pub mod error;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use text::{tail_chars, truncate_chars};
pub use types::*;
