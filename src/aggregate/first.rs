//! First-printing aggregators.
//!
//! Group by a derived key and retain only the earliest printing per
//! key; rows come out in the representatives' sort order.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::card::mana::generalize_mana_cost;
use crate::card::printing::CardPrinting;
use crate::card::sort_key::SortKey;

use super::{Aggregator, CardLink, ColumnDef, Row};

/// Earliest-printing slot for one derived key.
struct Earliest {
    card: CardPrinting,
    sort_key: SortKey,
}

/// Keep the earlier of the stored and offered printings for `key`.
fn offer<K: Eq + Hash>(map: &mut FxHashMap<K, Earliest>, key: K, card: &CardPrinting) {
    let sort_key = SortKey::of(card);
    map.entry(key)
        .and_modify(|existing| {
            if sort_key < existing.sort_key {
                existing.card = card.clone();
                existing.sort_key = sort_key.clone();
            }
        })
        .or_insert_with(|| Earliest {
            card: card.clone(),
            sort_key,
        });
}

/// First card printed for each (power, toughness) combination.
pub struct FirstByPowerToughness {
    columns: Vec<ColumnDef>,
    data: FxHashMap<(String, String), Earliest>,
}

impl FirstByPowerToughness {
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: vec![
                ColumnDef::new("power", "Power"),
                ColumnDef::new("toughness", "Toughness"),
                ColumnDef::new("name", "Name"),
                ColumnDef::new("set", "Set"),
                ColumnDef::new("releaseDate", "Release Date"),
            ],
            data: FxHashMap::default(),
        }
    }
}

impl Default for FirstByPowerToughness {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator for FirstByPowerToughness {
    fn name(&self) -> &str {
        "first_card_by_power_toughness"
    }

    fn display_name(&self) -> &str {
        "First Cards by Power and Toughness"
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn process(&mut self, card: &CardPrinting) {
        let (Some(power), Some(toughness)) = (card.power.as_deref(), card.toughness.as_deref())
        else {
            return;
        };
        if power.is_empty() || toughness.is_empty() {
            return;
        }

        offer(&mut self.data, (power.to_string(), toughness.to_string()), card);
    }

    fn finalize(&mut self) -> Vec<Row> {
        let mut entries: Vec<(&(String, String), &Earliest)> = self.data.iter().collect();
        entries.sort_by(|a, b| a.1.sort_key.cmp(&b.1.sort_key));

        entries
            .into_iter()
            .map(|((power, toughness), earliest)| {
                let card = &earliest.card;
                let mut row = Row::new();
                row.insert("power".to_string(), Value::from(power.clone()));
                row.insert("toughness".to_string(), Value::from(toughness.clone()));
                row.insert("name".to_string(), Value::from(card.name.clone()));
                row.insert("set".to_string(), Value::from(card.set.clone()));
                row.insert(
                    "releaseDate".to_string(),
                    Value::from(card.released_at.clone().unwrap_or_default()),
                );
                CardLink::of(card).write(&mut row);
                row
            })
            .collect()
    }
}

/// First card printed for each generalized mana cost, with a running
/// count of every printing sharing that cost shape.
pub struct FirstByManaCost {
    columns: Vec<ColumnDef>,
    data: FxHashMap<String, Earliest>,
    counts: FxHashMap<String, u64>,
}

impl FirstByManaCost {
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: vec![
                ColumnDef::new("generalizedManaCost", "Generalized Mana Cost"),
                ColumnDef::new("name", "Name"),
                ColumnDef::new("set", "Set"),
                ColumnDef::new("releaseDate", "Release Date"),
                ColumnDef::new("originalManaCost", "Original Mana Cost"),
                ColumnDef::new("count", "Count"),
            ],
            data: FxHashMap::default(),
            counts: FxHashMap::default(),
        }
    }
}

impl Default for FirstByManaCost {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator for FirstByManaCost {
    fn name(&self) -> &str {
        "first_card_by_generalized_mana_cost"
    }

    fn display_name(&self) -> &str {
        "First Cards by Generalized Mana Cost"
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn process(&mut self, card: &CardPrinting) {
        let Some(mana_cost) = card.mana_cost.as_deref() else {
            return;
        };
        if mana_cost.is_empty() {
            return;
        }

        let generalized = generalize_mana_cost(mana_cost);
        *self.counts.entry(generalized.clone()).or_insert(0) += 1;
        offer(&mut self.data, generalized, card);
    }

    fn finalize(&mut self) -> Vec<Row> {
        let mut entries: Vec<(&String, &Earliest)> = self.data.iter().collect();
        entries.sort_by(|a, b| a.1.sort_key.cmp(&b.1.sort_key));

        entries
            .into_iter()
            .map(|(generalized, earliest)| {
                let card = &earliest.card;
                let mut row = Row::new();
                row.insert(
                    "generalizedManaCost".to_string(),
                    Value::from(generalized.clone()),
                );
                row.insert("name".to_string(), Value::from(card.name.clone()));
                row.insert("set".to_string(), Value::from(card.set.clone()));
                row.insert(
                    "releaseDate".to_string(),
                    Value::from(card.released_at.clone().unwrap_or_default()),
                );
                row.insert(
                    "originalManaCost".to_string(),
                    Value::from(card.mana_cost.clone().unwrap_or_default()),
                );
                row.insert(
                    "count".to_string(),
                    Value::from(self.counts.get(generalized).copied().unwrap_or(0)),
                );
                CardLink::of(card).write(&mut row);
                row
            })
            .collect()
    }
}
