//! Domain layer: the genealogy tree and its queries
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod arena;
pub mod error;
pub mod genealogy;

pub use arena::{Ancestors, Bloodline, LineageIterator, Vampire, VampireId, VampireNode};
pub use error::{GenealogyError, GenealogyResult};
