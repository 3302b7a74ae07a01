#![deny(missing_docs)]

//! Simplicial-configuration data structures and the validity checks that make
//! a random bipartite matching a legal simplicial complex.

mod builder;
mod complex;
mod hash;
mod ids;
mod sequences;
mod serialization;
mod swap;
mod validity;

pub use builder::random_configuration;
pub use complex::{Configuration, FacetSignature};
pub use hash::canonical_hash;
pub use sequences::SequencePair;
pub use serialization::{
    configuration_from_bytes, configuration_from_json, configuration_to_bytes,
    configuration_to_json,
};
pub use swap::swap_pair;
pub use validity::{check, check_with, is_connected, is_valid, is_valid_with, CheckOptions, Violation};
