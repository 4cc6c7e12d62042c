//! Card data model and canonicalization utilities.
//!
//! - `printing`: the serde model of one card printing and its faces
//! - `types`: type-line tokenization and type-set predicates
//! - `sort_key`: the total order over printings ("first printed" wins)
//! - `mana`: mana-cost generalization

pub mod mana;
pub mod printing;
pub mod sort_key;
pub mod types;

pub use mana::generalize_mana_cost;
pub use printing::{CardFace, CardPrinting, FaceView, ImageUris};
pub use sort_key::SortKey;
pub use types::{extract_types, is_all_creature_types, is_permanent, TypeSet, BASIC_LAND_TYPES};
