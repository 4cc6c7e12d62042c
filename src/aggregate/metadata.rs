//! Set-cardinality aggregators over printing metadata.

use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;

use crate::card::printing::CardPrinting;

use super::{Aggregator, CardLink, ColumnDef, Row};

/// Promo types that are themselves foil treatments.
pub const FOIL_PROMO_TYPES: [&str; 16] = [
    "confettifoil",
    "doublerainbow",
    "embossed",
    "galaxyfoil",
    "gilded",
    "halofoil",
    "invisibleink",
    "neonink",
    "oilslick",
    "rainbowfoil",
    "raisedfoil",
    "ripplefoil",
    "silverfoil",
    "stepandcompleat",
    "surgefoil",
    "textured",
];

/// Sets whose every printing carries its own special foil treatment.
pub const SPECIAL_FOIL_SETS: [(&str, &str); 5] = [
    ("mps", "inventions"),
    ("mp2", "invocations"),
    ("exp", "expedition"),
    ("psus", "sunburst"),
    ("dbl", "silverscreen"),
];

/// Release of 8th Edition: the traditional foiling process changed
/// here, splitting premodern from modern foils.
fn modern_foil_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2003, 7, 28).expect("valid cutoff date")
}

/// Distinct illustration count per (set, name), descending.
pub struct IllustrationsBySet {
    columns: Vec<ColumnDef>,
    data: FxHashMap<(String, String), FxHashSet<String>>,
    links: FxHashMap<(String, String), CardLink>,
}

impl IllustrationsBySet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: vec![
                ColumnDef::new("set", "Set"),
                ColumnDef::new("name", "Name"),
                ColumnDef::new("count", "Count"),
            ],
            data: FxHashMap::default(),
            links: FxHashMap::default(),
        }
    }
}

impl Default for IllustrationsBySet {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator for IllustrationsBySet {
    fn name(&self) -> &str {
        "count_card_illustrations_by_set"
    }

    fn display_name(&self) -> &str {
        "Card Illustrations Count by Set"
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn process(&mut self, card: &CardPrinting) {
        let key = (card.set.clone(), card.name.clone());
        self.data
            .entry(key.clone())
            .or_default()
            .insert(card.illustration_id.clone().unwrap_or_default());
        if !self.links.contains_key(&key) {
            self.links.insert(key, CardLink::of(card));
        }
    }

    fn finalize(&mut self) -> Vec<Row> {
        let mut entries: Vec<(&(String, String), usize)> = self
            .data
            .iter()
            .map(|(key, illustrations)| (key, illustrations.len()))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        entries
            .into_iter()
            .map(|((set, name), count)| {
                let mut row = Row::new();
                row.insert("set".to_string(), Value::from(set.clone()));
                row.insert("name".to_string(), Value::from(name.clone()));
                row.insert("count".to_string(), Value::from(count));
                if let Some(link) = self.links.get(&(set.clone(), name.clone())) {
                    link.write(&mut row);
                }
                row
            })
            .collect()
    }
}

/// Distinct promo types per card name, descending by count.
pub struct PromoTypesByName {
    columns: Vec<ColumnDef>,
    data: FxHashMap<String, FxHashSet<String>>,
    links: FxHashMap<String, CardLink>,
}

impl PromoTypesByName {
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: vec![
                ColumnDef::new("name", "Name"),
                ColumnDef::new("promoTypes", "Promo Types"),
                ColumnDef::new("count", "Count"),
            ],
            data: FxHashMap::default(),
            links: FxHashMap::default(),
        }
    }
}

impl Default for PromoTypesByName {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator for PromoTypesByName {
    fn name(&self) -> &str {
        "promo_types_by_name"
    }

    fn display_name(&self) -> &str {
        "Promo Types by Card Name"
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn process(&mut self, card: &CardPrinting) {
        if card.promo_types.is_empty() {
            return;
        }
        self.data
            .entry(card.name.clone())
            .or_default()
            .extend(card.promo_types.iter().cloned());
        if !self.links.contains_key(&card.name) {
            self.links.insert(card.name.clone(), CardLink::of(card));
        }
    }

    fn finalize(&mut self) -> Vec<Row> {
        sorted_set_rows(&self.data, &self.links, "promoTypes")
    }
}

/// Distinct foil treatments per card name, descending by count.
///
/// Treatments are derived, not read off the record: special foil
/// sets, foil promo types, From the Vault printings, the
/// premodern/modern split on traditional foils, and etched finishes.
pub struct FoilTypesByName {
    columns: Vec<ColumnDef>,
    data: FxHashMap<String, FxHashSet<String>>,
    links: FxHashMap<String, CardLink>,
}

impl FoilTypesByName {
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: vec![
                ColumnDef::new("name", "Name"),
                ColumnDef::new("foilTypes", "Foil Types"),
                ColumnDef::new("count", "Count"),
            ],
            data: FxHashMap::default(),
            links: FxHashMap::default(),
        }
    }

    fn add(&mut self, name: &str, foil_type: &str) {
        self.data
            .entry(name.to_string())
            .or_default()
            .insert(foil_type.to_string());
    }
}

impl Default for FoilTypesByName {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator for FoilTypesByName {
    fn name(&self) -> &str {
        "foil_types_by_name"
    }

    fn display_name(&self) -> &str {
        "Foil Types by Card Name"
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn process(&mut self, card: &CardPrinting) {
        if !self.links.contains_key(&card.name) {
            self.links.insert(card.name.clone(), CardLink::of(card));
        }

        // Special sets override everything else about the printing.
        if let Some((_, foil_type)) = SPECIAL_FOIL_SETS
            .iter()
            .find(|(set, _)| *set == card.set)
        {
            let name = card.name.clone();
            self.add(&name, foil_type);
            return;
        }

        let name = card.name.clone();
        for promo_type in &card.promo_types {
            if FOIL_PROMO_TYPES.contains(&promo_type.as_str()) {
                self.add(&name, promo_type);
            }
        }

        if card.set_type == "from_the_vault" {
            self.add(&name, "from_the_vault");
        }

        // TODO: SDCC planeswalker promos have their own treatment.

        if card.finishes.iter().any(|finish| finish == "foil") {
            let premodern = card
                .released_at
                .as_deref()
                .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
                .is_some_and(|date| date < modern_foil_cutoff());
            self.add(&name, if premodern { "premodern_foil" } else { "modern_foil" });
        }

        if card.finishes.iter().any(|finish| finish == "etched") {
            self.add(&name, "etched");
        }
    }

    fn finalize(&mut self) -> Vec<Row> {
        sorted_set_rows(&self.data, &self.links, "foilTypes")
    }
}

/// Rows for a name-to-set-of-strings report: the joined sorted set,
/// its size as the count, descending by count.
fn sorted_set_rows(
    data: &FxHashMap<String, FxHashSet<String>>,
    links: &FxHashMap<String, CardLink>,
    set_field: &str,
) -> Vec<Row> {
    let mut entries: Vec<(&String, &FxHashSet<String>)> = data.iter().collect();
    entries.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

    entries
        .into_iter()
        .map(|(name, values)| {
            let mut sorted: Vec<&str> = values.iter().map(String::as_str).collect();
            sorted.sort_unstable();

            let mut row = Row::new();
            row.insert("name".to_string(), Value::from(name.clone()));
            row.insert(set_field.to_string(), Value::from(sorted.join(", ")));
            row.insert("count".to_string(), Value::from(values.len()));
            if let Some(link) = links.get(name) {
                link.write(&mut row);
            }
            row
        })
        .collect()
}
