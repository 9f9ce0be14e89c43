//! Genealogy of vampires as an arena-backed tree.
//!
//! Each vampire has at most one creator and any number of offspring.
//! [`Bloodline`] stores the nodes; queries such as depth, seniority, closest
//! common ancestor and descendant counts are methods on it.

pub mod config;
pub mod domain;
pub mod tree_traits;
pub mod util;

pub use config::Settings;
pub use domain::{Bloodline, GenealogyError, GenealogyResult, Vampire, VampireId};
