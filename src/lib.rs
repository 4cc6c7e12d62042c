//! # mtg-reports
//!
//! A streaming report engine for Magic: the Gathering bulk card data.
//!
//! One pass over a large JSON stream of card printings feeds a set of
//! independent accumulators, each of which materializes one report:
//! grouped counts, per-set maxima, first printings by derived key,
//! cycle completion times, and the maximal-type-set computations.
//!
//! ## Design Principles
//!
//! 1. **Single pass, independent state**: every report implements one
//!    `Aggregator` interface and owns its private state; a record is
//!    fed to each in turn and no accumulator observes another's.
//!
//! 2. **Tolerant per card, strict per stream**: a malformed or partial
//!    card never aborts a run - absent fields are skips, bad elements
//!    are logged. I/O failures end the pass.
//!
//! 3. **Bounded memory**: the input array is scanned one element at a
//!    time; nothing holds the whole dataset.
//!
//! ## Modules
//!
//! - `card`: printing model, type extraction, sort keys, mana costs
//! - `vocab`: creature-type and land-type vocabularies
//! - `maximal`: the antichain of type sets and its engine
//! - `aggregate`: the aggregator protocol and every report kind
//! - `stream`: incremental JSON card stream
//! - `report`: pass driver and JSON output

pub mod aggregate;
pub mod card;
pub mod error;
pub mod maximal;
pub mod report;
pub mod stream;
pub mod vocab;

// Re-export commonly used types
pub use crate::card::{
    extract_types, generalize_mana_cost, is_all_creature_types, is_permanent, CardFace,
    CardPrinting, FaceView, SortKey, TypeSet, BASIC_LAND_TYPES,
};

pub use crate::vocab::TypeVocabulary;

pub use crate::maximal::{Antichain, GlobalEffect, MaximalTypesEngine, TypeKey};

pub use crate::aggregate::{
    default_aggregators, load_cycles, Aggregator, ColumnDef, CountAggregator, CycleDefinition,
    CycleTimes, FirstByManaCost, FirstByPowerToughness, FoilTypesByName, IllustrationsBySet,
    KeyField, MaxCollectorNumberBySet, MaximalPrintedTypes, MaximalTypesWithEffects,
    PromoTypesByName, Row,
};

pub use crate::error::{Error, Result};
pub use crate::report::{run_pass, timestamped_output_dir, write_reports, PassSummary};
pub use crate::stream::CardStream;
