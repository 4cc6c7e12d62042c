//! Mana-cost generalization.
//!
//! Replaces concrete color pips with position-based placeholders so
//! costs group by shape rather than by exact colors: `{W}{W}` and
//! `{U}{U}` both become `{M}{M}`.

/// The five color letters, in canonical order.
const COLORS: &str = "WUBRG";

/// Generic placeholder alphabet, assigned in first-seen order.
const GENERICS: [char; 4] = ['M', 'N', 'O', 'P'];

/// Generalize a mana cost string.
///
/// Each distinct color letter is mapped to the next unused generic
/// placeholder in order of first appearance. A cost with all five
/// colors is returned unchanged; it is already maximally distinct.
/// Everything else (digits, braces, slashes, `P` for Phyrexian, `C`
/// for colorless) passes through.
///
/// Re-running on an already-generalized cost is a no-op: the generic
/// letters are not colors, so nothing is remapped.
///
/// ```
/// use mtg_reports::card::generalize_mana_cost;
///
/// assert_eq!(generalize_mana_cost("{W}{U}{R}"), "{M}{N}{O}");
/// assert_eq!(generalize_mana_cost("{W}{U}{B}{R}{G}"), "{W}{U}{B}{R}{G}");
/// ```
#[must_use]
pub fn generalize_mana_cost(mana_cost: &str) -> String {
    let mut color_map: Vec<(char, char)> = Vec::new();

    for c in mana_cost.chars() {
        if COLORS.contains(c) && !color_map.iter().any(|(color, _)| *color == c) {
            if color_map.len() < GENERICS.len() {
                color_map.push((c, GENERICS[color_map.len()]));
            } else {
                return mana_cost.to_string();
            }
        }
    }

    mana_cost
        .chars()
        .map(|c| {
            color_map
                .iter()
                .find(|(color, _)| *color == c)
                .map_or(c, |(_, generic)| *generic)
        })
        .collect()
}
