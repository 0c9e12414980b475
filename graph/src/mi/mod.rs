//! The mutual-information surrogate engine (spec §4.1): scores every edge of
//! an attributed graph into a strictly-positive, finite "informativeness"
//! value, combining one base strategy with up to eight multiplicative
//! modifiers.
mod cache;
mod config;
mod engine;
mod modifiers;
mod strategies;

pub use cache::MICache;
pub use config::{MIConfig, MiInputs};
pub use engine::MiEngine;
pub use strategies::{
    adamic_adar, attribute_mi, density_normalized_jaccard, hyperedge_mi, jaccard, rarity_score,
};
