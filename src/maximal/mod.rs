//! Maximal-type-set computation.
//!
//! - `antichain`: the type-set-to-representative map and its no-subset
//!   invariant
//! - `effects`: the ordered table of global type-granting effects
//! - `engine`: face iteration, special cases, and antichain updates

pub mod antichain;
pub mod effects;
pub mod engine;

pub use antichain::{Antichain, Representative, TypeKey};
pub use effects::{global_effects, GlobalEffect};
pub use engine::MaximalTypesEngine;
