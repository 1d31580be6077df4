//! rheo-bib: citation bibliography store and catalog projections.
//!
//! Provides:
//! - A BibTeX parser for the model bibliography (`data/models.bib`)
//! - The read-only [`Bibliography`] store, keyed by citation key
//! - A flat table projection ([`BibTable`]) indexed by citation key
//! - A nested tree projection ([`TreeView`]) for interactive inspection
//!
//! # Architecture
//!
//! The store is loaded once through an explicit [`Bibliography::load`] (or
//! [`Bibliography::bundled`] for the shipped file) and is immutable
//! afterwards. Both projections are recomputed on demand and never feed
//! back into the store.
//!
//! # Example
//!
//! ```
//! use rheo_bib::Bibliography;
//!
//! let bib = Bibliography::bundled().unwrap();
//! let table = bib.to_table();
//! assert_eq!(table.len(), bib.len());
//! assert_eq!(table.get("bingham_1916", "year"), Some("1916"));
//! ```

pub mod bibliography;
pub mod error;
pub mod table;
pub mod tree;

mod parse;

// Re-exports for ergonomics
pub use bibliography::{Bibliography, CitationEntry};
pub use error::{BibError, BibResult};
pub use table::{BibRow, BibTable};
pub use tree::TreeView;
