//! Counting aggregators.

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::card::printing::CardPrinting;
use crate::card::sort_key::parse_collector_number;

use super::{Aggregator, CardLink, ColumnDef, Row};

/// Field a `CountAggregator` can group by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyField {
    Name,
    Set,
}

impl KeyField {
    /// Row field name.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            KeyField::Name => "name",
            KeyField::Set => "set",
        }
    }

    /// Column header.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            KeyField::Name => "Name",
            KeyField::Set => "Set",
        }
    }

    fn extract(self, card: &CardPrinting) -> &str {
        match self {
            KeyField::Name => &card.name,
            KeyField::Set => &card.set,
        }
    }
}

/// Generic counting aggregator over a configurable key.
///
/// Groups printings by a tuple of key fields and counts either the
/// printings themselves or their finish variants. Rows come out in
/// descending count order. When "name" is part of the key, the
/// first-seen printing's link metadata rides along.
pub struct CountAggregator {
    name: String,
    display_name: String,
    key_fields: Vec<KeyField>,
    count_finishes: bool,
    columns: Vec<ColumnDef>,
    data: FxHashMap<Vec<String>, u64>,
    links: FxHashMap<Vec<String>, CardLink>,
}

impl CountAggregator {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        key_fields: Vec<KeyField>,
        count_finishes: bool,
    ) -> Self {
        let mut columns: Vec<ColumnDef> = key_fields
            .iter()
            .map(|field| ColumnDef::new(field.field(), field.header()))
            .collect();
        columns.push(ColumnDef::new("count", "Count"));

        Self {
            name: name.into(),
            display_name: display_name.into(),
            key_fields,
            count_finishes,
            columns,
            data: FxHashMap::default(),
            links: FxHashMap::default(),
        }
    }

    fn tracks_links(&self) -> bool {
        self.key_fields.contains(&KeyField::Name)
    }
}

impl Aggregator for CountAggregator {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn process(&mut self, card: &CardPrinting) {
        // A card missing any key field doesn't contribute.
        if self.key_fields.iter().any(|field| field.extract(card).is_empty()) {
            return;
        }
        let key: Vec<String> = self
            .key_fields
            .iter()
            .map(|field| field.extract(card).to_string())
            .collect();

        let increment = if self.count_finishes {
            card.finishes.len() as u64
        } else {
            1
        };
        *self.data.entry(key.clone()).or_insert(0) += increment;

        // Any printing's link will do for a count report.
        if self.tracks_links() && !self.links.contains_key(&key) {
            self.links.insert(key, CardLink::of(card));
        }
    }

    fn finalize(&mut self) -> Vec<Row> {
        let mut entries: Vec<(&Vec<String>, &u64)> = self.data.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));

        entries
            .into_iter()
            .map(|(key, count)| {
                let mut row = Row::new();
                for (field, value) in self.key_fields.iter().zip(key) {
                    row.insert(field.field().to_string(), Value::from(value.clone()));
                }
                row.insert("count".to_string(), Value::from(*count));
                if let Some(link) = self.links.get(key) {
                    link.write(&mut row);
                }
                row
            })
            .collect()
    }
}

/// Maximum purely-numeric collector number per set, descending.
pub struct MaxCollectorNumberBySet {
    columns: Vec<ColumnDef>,
    data: FxHashMap<String, u64>,
}

impl MaxCollectorNumberBySet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: vec![
                ColumnDef::new("set", "Set"),
                ColumnDef::new("maxNumber", "Max Collector Number"),
            ],
            data: FxHashMap::default(),
        }
    }
}

impl Default for MaxCollectorNumberBySet {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator for MaxCollectorNumberBySet {
    fn name(&self) -> &str {
        "max_collector_number_by_set"
    }

    fn display_name(&self) -> &str {
        "Maximum Collector Number by Set"
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn process(&mut self, card: &CardPrinting) {
        // Suffixed numbers like "123a" are variants, not the frame of
        // the set; only purely numeric ones count here.
        if card.set.is_empty()
            || card.collector_number.is_empty()
            || !card.collector_number.chars().all(|c| c.is_ascii_digit())
        {
            return;
        }
        let number = parse_collector_number(&card.collector_number);
        let max = self.data.entry(card.set.clone()).or_insert(0);
        *max = (*max).max(number);
    }

    fn finalize(&mut self) -> Vec<Row> {
        let mut entries: Vec<(&String, &u64)> = self.data.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1));

        entries
            .into_iter()
            .map(|(set, max)| {
                let mut row = Row::new();
                row.insert("set".to_string(), Value::from(set.clone()));
                row.insert("maxNumber".to_string(), Value::from(*max));
                row
            })
            .collect()
    }
}
