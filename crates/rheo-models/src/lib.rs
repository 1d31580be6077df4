//! rheo-models: constitutive flow-curve models for rheomodel.
//!
//! Provides:
//! - Parameter structs for the classical flow-curve models (Newtonian,
//!   power-law, Bingham, Herschel-Bulkley, Casson, Cross, Carreau,
//!   Carreau-Yasuda, three-component)
//! - The `FlowModel` trait pairing each model with its display formula
//! - A citation-keyed registry resolving bibliography keys to models
//!
//! # Architecture
//!
//! Every model is a pure closed-form expression over a scalar shear rate.
//! Inputs are not validated: a negative shear rate under a fractional
//! exponent, or a zero critical shear rate, propagates NaN/inf per IEEE-754
//! rather than raising an error.
//!
//! # Example
//!
//! ```
//! use rheo_models::{FlowModel, HerschelBulkley, Registry};
//!
//! let hb = HerschelBulkley::default();
//! assert_eq!(hb.stress(0.0), 1.0);
//!
//! let registry = Registry::standard();
//! let entry = registry.lookup("herschel_bulkley_1926").unwrap();
//! assert_eq!(entry.model().stress(0.0), 1.0);
//! ```

pub mod error;
pub mod model;
pub mod models;
pub mod registry;

// Re-exports for ergonomics
pub use error::{ModelError, ModelResult};
pub use model::FlowModel;
pub use models::{
    Bingham, Carreau, CarreauYasuda, Casson, Cross, HerschelBulkley, Newtonian, PowerLaw,
    ThreeComponent,
};
pub use registry::{ModelEntry, Registry};
