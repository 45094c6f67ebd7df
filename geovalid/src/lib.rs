//! Geovalid - geographic survey validation
//!
//! This library validates survey data organized as named rectangular areas,
//! each containing quadrilateral sectors. Two invariants are checked per
//! area: every sector lies entirely inside its area, and no two sectors of
//! the same area overlap.
//!
//! # High-Level API
//!
//! ```ignore
//! use geovalid::record::RecordParser;
//! use geovalid::validator::BatchValidator;
//!
//! let records = RecordParser::read_all(std::fs::File::open(path)?)?;
//! BatchValidator::new().run(&records, &mut sink);
//! ```
//!
//! The validation pass is synchronous and sequential; callers that need it
//! off their main thread run it on a blocking worker and receive output
//! through a channel-backed [`validator::StatusSink`].

pub mod config;
pub mod coord;
pub mod logging;
pub mod record;
pub mod region;
pub mod survey;
pub mod validator;

/// Version of the geovalid library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_is_set() {
        assert!(!super::VERSION.is_empty());
    }
}
