//! apitree-extract - Documentation markup to flat endpoint mapping
//!
//! This crate provides the first stage of the apitree pipeline:
//! - [`Extractor`] for locating operations and their parameter tables
//! - [`ExtractConfig`], [`ExtractMode`] and [`Selectors`] for tuning extraction
//! - [`ExtractError`] for markup that lacks a required element

mod config;
mod error;
mod extract;

pub use config::{ExtractConfig, ExtractMode, Selectors};
pub use error::{ExtractError, ExtractResult};
pub use extract::Extractor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ExtractConfig, ExtractError, ExtractMode, ExtractResult, Extractor, Selectors};
    pub use apitree_core::{FlatMapping, ParamDescriptor};
}
