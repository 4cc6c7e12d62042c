//! Report aggregators.
//!
//! Every report is one `Aggregator`: private state written during a
//! single pass over the card stream, materialized once at the end as
//! ordered flat rows. Accumulators never observe each other's state,
//! and `process` never fails on a single malformed card - missing
//! fields just mean the card doesn't contribute.
//!
//! - `count`: grouped counts and per-set maxima
//! - `first`: earliest printing per derived key
//! - `metadata`: set-cardinality reports (illustrations, promos, foils)
//! - `cycles`: completion time spans for named card cycles
//! - `types`: the maximal-type-set reports

pub mod count;
pub mod cycles;
pub mod first;
pub mod metadata;
pub mod types;

use serde_json::Value;

use crate::card::printing::CardPrinting;
use crate::vocab::TypeVocabulary;

pub use count::{CountAggregator, KeyField, MaxCollectorNumberBySet};
pub use cycles::{load_cycles, CycleDefinition, CycleTimes};
pub use first::{FirstByManaCost, FirstByPowerToughness};
pub use metadata::{FoilTypesByName, IllustrationsBySet, PromoTypesByName};
pub use types::{MaximalPrintedTypes, MaximalTypesWithEffects};

/// One finalized report row: flat string/number fields.
pub type Row = serde_json::Map<String, Value>;

/// Column metadata for a report.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColumnDef {
    pub field: String,
    pub header: String,
}

impl ColumnDef {
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
        }
    }
}

/// Capability interface shared by every report kind.
///
/// ## Implementation Notes
///
/// - `process`: pure mutation of private state; must tolerate any
///   single card (absent fields are skips, not errors)
/// - `finalize`: called once after the pass; returns rows already in
///   display order
/// - `warnings`: non-fatal diagnostics accumulated along the way
pub trait Aggregator {
    /// Machine name; doubles as the output file stem.
    fn name(&self) -> &str;

    /// Human-readable report title.
    fn display_name(&self) -> &str;

    /// Column schema for the finalized rows.
    fn columns(&self) -> &[ColumnDef];

    /// Fold one printing into this report's state.
    fn process(&mut self, card: &CardPrinting);

    /// Materialize the ordered rows.
    fn finalize(&mut self) -> Vec<Row>;

    /// Non-fatal diagnostics gathered during the run.
    fn warnings(&self) -> &[String] {
        &[]
    }
}

/// Link fields shared by rows that point back at a printing.
#[derive(Clone, Debug, Default)]
pub(crate) struct CardLink {
    pub scryfall_uri: String,
    pub image_uri: String,
}

impl CardLink {
    pub fn of(card: &CardPrinting) -> Self {
        Self {
            scryfall_uri: card.scryfall_uri.clone(),
            image_uri: card.image_uri().to_string(),
        }
    }

    pub fn write(&self, row: &mut Row) {
        row.insert("scryfall_uri".to_string(), Value::from(self.scryfall_uri.clone()));
        row.insert("image_uri".to_string(), Value::from(self.image_uri.clone()));
    }
}

/// The full default report set for one run.
#[must_use]
pub fn default_aggregators(
    vocab: &TypeVocabulary,
    cycles: Vec<CycleDefinition>,
) -> Vec<Box<dyn Aggregator>> {
    vec![
        Box::new(CountAggregator::new(
            "cards_by_name",
            "Cards by Name",
            vec![KeyField::Name],
            false,
        )),
        Box::new(CountAggregator::new(
            "finishes_by_name",
            "Finishes by Name",
            vec![KeyField::Name],
            true,
        )),
        Box::new(CountAggregator::new(
            "cards_by_set_name",
            "Cards by Set and Name",
            vec![KeyField::Set, KeyField::Name],
            false,
        )),
        Box::new(CountAggregator::new(
            "finishes_by_set_name",
            "Finishes by Set and Name",
            vec![KeyField::Set, KeyField::Name],
            true,
        )),
        Box::new(MaxCollectorNumberBySet::new()),
        Box::new(IllustrationsBySet::new()),
        Box::new(PromoTypesByName::new()),
        Box::new(FoilTypesByName::new()),
        Box::new(FirstByPowerToughness::new()),
        Box::new(FirstByManaCost::new()),
        Box::new(CycleTimes::new(cycles)),
        Box::new(MaximalPrintedTypes::new(vocab)),
        Box::new(MaximalTypesWithEffects::new(vocab)),
    ]
}
