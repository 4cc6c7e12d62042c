//! Cycle completion times.
//!
//! A cycle is an externally defined list of card names plus a
//! finished/unfinished flag. The aggregator tracks the earliest
//! release date seen per card name and reports, per cycle, the span
//! between its earliest and latest member (or today while the cycle
//! is still running).

use std::path::Path;

use chrono::{NaiveDate, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::card::printing::CardPrinting;

use super::{Aggregator, CardLink, ColumnDef, Row};

/// One externally defined cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleDefinition {
    pub name: String,
    pub cards: Vec<String>,
    pub finished: bool,
}

/// Load cycle definitions from a JSON array file.
///
/// Failure is non-fatal: a warning is logged and no cycles run.
#[must_use]
pub fn load_cycles(path: &Path) -> Vec<CycleDefinition> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read cycle definitions");
            return Vec::new();
        }
    };
    match serde_json::from_str(&text) {
        Ok(cycles) => cycles,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to parse cycle definitions");
            Vec::new()
        }
    }
}

/// Format a day count as years/months/days, skipping zero parts.
#[must_use]
pub fn format_time_difference(days: i64) -> String {
    let years = days / 365;
    let remaining = days % 365;
    let months = remaining / 30;
    let days = remaining % 30;

    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{} year{}", years, if years != 1 { "s" } else { "" }));
    }
    if months > 0 {
        parts.push(format!("{} month{}", months, if months != 1 { "s" } else { "" }));
    }
    if days > 0 {
        parts.push(format!("{} day{}", days, if days != 1 { "s" } else { "" }));
    }
    parts.join(", ")
}

/// Completion time per cycle, descending by elapsed days.
pub struct CycleTimes {
    columns: Vec<ColumnDef>,
    cycles: Vec<CycleDefinition>,
    earliest_dates: FxHashMap<String, NaiveDate>,
    links: FxHashMap<String, CardLink>,
    warnings: Vec<String>,
}

impl CycleTimes {
    #[must_use]
    pub fn new(cycles: Vec<CycleDefinition>) -> Self {
        Self {
            columns: vec![
                ColumnDef::new("cycle", "Cycle"),
                ColumnDef::new("status", "Status"),
                ColumnDef::new("cards", "Cards"),
                ColumnDef::new("time", "Time"),
                ColumnDef::new("startDate", "Start Date"),
                ColumnDef::new("endDate", "End Date"),
            ],
            cycles,
            earliest_dates: FxHashMap::default(),
            links: FxHashMap::default(),
            warnings: Vec::new(),
        }
    }
}

impl Aggregator for CycleTimes {
    fn name(&self) -> &str {
        "cycle_completion_time"
    }

    fn display_name(&self) -> &str {
        "Cycle Completion Times"
    }

    fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn process(&mut self, card: &CardPrinting) {
        let Some(date) = card
            .released_at
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        else {
            return;
        };
        if card.name.is_empty() {
            return;
        }

        use std::collections::hash_map::Entry;
        match self.earliest_dates.entry(card.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(date);
                self.links.insert(card.name.clone(), CardLink::of(card));
            }
            Entry::Occupied(mut slot) => {
                if date < *slot.get() {
                    slot.insert(date);
                    self.links.insert(card.name.clone(), CardLink::of(card));
                }
            }
        }
    }

    fn finalize(&mut self) -> Vec<Row> {
        let today = Utc::now().date_naive();
        let mut reported: Vec<(Row, i64)> = Vec::new();

        for cycle in &self.cycles {
            let matched: Vec<NaiveDate> = cycle
                .cards
                .iter()
                .filter_map(|name| self.earliest_dates.get(name).copied())
                .collect();

            for name in &cycle.cards {
                if !self.earliest_dates.contains_key(name) {
                    self.warnings.push(format!(
                        "cycle '{}' references card '{}' that never appeared in the stream",
                        cycle.name, name
                    ));
                }
            }

            let Some(earliest) = matched.iter().min().copied() else {
                self.warnings
                    .push(format!("cycle '{}' matched no cards; skipped", cycle.name));
                continue;
            };
            let latest = if cycle.finished {
                matched.iter().max().copied().unwrap_or(earliest)
            } else {
                today
            };

            let days = (latest - earliest).num_days();
            let mut row = Row::new();
            row.insert("cycle".to_string(), Value::from(cycle.name.clone()));
            row.insert(
                "status".to_string(),
                Value::from(if cycle.finished { "Finished" } else { "Unfinished" }),
            );
            row.insert("cards".to_string(), Value::from(cycle.cards.join(", ")));
            row.insert("time".to_string(), Value::from(format_time_difference(days)));
            row.insert(
                "startDate".to_string(),
                Value::from(earliest.format("%B %d, %Y").to_string()),
            );
            row.insert(
                "endDate".to_string(),
                Value::from(if cycle.finished {
                    latest.format("%B %d, %Y").to_string()
                } else {
                    "Ongoing".to_string()
                }),
            );
            row.insert("days".to_string(), Value::from(days));
            reported.push((row, days));
        }

        reported.sort_by(|a, b| b.1.cmp(&a.1));
        reported.into_iter().map(|(row, _)| row).collect()
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}
