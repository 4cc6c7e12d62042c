//! Printing sort keys - the total order behind "first printed".
//!
//! Smaller key = earlier/preferred printing. Ties are broken by set
//! code, then by the collector number parsed as an integer, then by
//! the raw collector number string ("123" before "123a").

use chrono::NaiveDate;

use super::printing::CardPrinting;

/// Sort key for one printing. Derives the full lexicographic order
/// over its fields in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey {
    /// Release date; printings with no (or an unparseable) date sort
    /// after every dated printing.
    pub released_at: NaiveDate,
    /// Set code.
    pub set: String,
    /// Collector number with non-digits stripped, parsed as an
    /// integer; 0 when nothing parses.
    pub number: u64,
    /// Raw collector number string, as the final tiebreak.
    pub collector_number: String,
}

impl SortKey {
    /// Build the sort key for a printing.
    #[must_use]
    pub fn of(card: &CardPrinting) -> Self {
        let released_at = card
            .released_at
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .unwrap_or(NaiveDate::MAX);

        Self {
            released_at,
            set: card.set.clone(),
            number: parse_collector_number(&card.collector_number),
            collector_number: card.collector_number.clone(),
        }
    }
}

/// Strip non-digits and parse; empty or all-alphabetic numbers
/// parse to 0.
#[must_use]
pub fn parse_collector_number(collector_number: &str) -> u64 {
    let digits: String = collector_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}
