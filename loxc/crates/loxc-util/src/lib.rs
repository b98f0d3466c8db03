//! loxc-util - Core Utilities and Foundation Types
//!
//! This crate holds the pieces every loxc phase shares: source locations
//! ([`Span`]), the diagnostic model ([`Diagnostic`], [`Level`],
//! [`DiagnosticCode`]), the [`Reporter`] seam through which a phase hands its
//! diagnostics to whoever drives it, and the default collecting reporter
//! ([`Handler`]).
//!
//! # Example
//!
//! ```
//! use loxc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character: '@'.")
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&mut handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.diagnostics()[0].line(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

mod edge_cases;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, Reporter, SourceSnippet,
};
pub use error::{SourceError, SourceResult};
pub use span::Span;
