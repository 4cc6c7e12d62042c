//! Card printing model - one record per physical printing.
//!
//! `CardPrinting` mirrors the bulk-data JSON shape. Every field is
//! tolerant of absence: a partial record deserializes with defaults
//! instead of failing, so one malformed card never aborts a pass.
//!
//! Multi-faced cards carry their faces in `card_faces`. Faces never
//! exist on their own; report code iterates them through `faces()`,
//! which also covers the single-faced case.

use serde::{Deserialize, Serialize};

/// Set types that mark a printing as non-traditional.
pub const NON_TRADITIONAL_SET_TYPES: [&str; 2] = ["memorabilia", "funny"];

/// Layouts that mark a printing as non-traditional.
pub const NON_TRADITIONAL_LAYOUTS: [&str; 2] = ["emblem", "token"];

/// Border colors that mark a printing as non-traditional.
pub const NON_TRADITIONAL_BORDERS: [&str; 2] = ["silver", "gold"];

/// Image links for a printing. Only the `normal` size is ever read;
/// the rest of the object is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUris {
    pub normal: String,
}

/// One face of a multi-faced card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardFace {
    pub name: String,
    pub type_line: String,
    pub mana_cost: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
}

/// One physical printing of a card.
///
/// Unknown JSON fields are ignored; missing fields default to
/// empty/`None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardPrinting {
    pub name: String,
    /// Short set code (the bulk data calls this field `set`).
    pub set: String,
    pub set_name: String,
    pub collector_number: String,
    /// ISO calendar date string; kept raw and parsed where needed.
    pub released_at: Option<String>,
    pub type_line: String,
    pub card_faces: Option<Vec<CardFace>>,
    pub mana_cost: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub finishes: Vec<String>,
    pub promo_types: Vec<String>,
    pub set_type: String,
    pub layout: String,
    pub border_color: String,
    pub illustration_id: Option<String>,
    pub keywords: Vec<String>,
    pub scryfall_uri: String,
    pub image_uris: Option<ImageUris>,
}

/// Borrowed view of one face for processing.
///
/// Faces in the bulk data carry no `keywords` of their own, so the
/// view of a real face exposes an empty keyword slice; the view of a
/// single-faced card exposes the printing's keywords.
#[derive(Clone, Copy, Debug)]
pub struct FaceView<'a> {
    pub name: &'a str,
    pub type_line: &'a str,
    pub mana_cost: Option<&'a str>,
    pub power: Option<&'a str>,
    pub toughness: Option<&'a str>,
    pub keywords: &'a [String],
}

impl CardPrinting {
    /// Whether this printing counts as a traditional card.
    ///
    /// Memorabilia/funny sets, emblem/token layouts, the "past"
    /// placeholder set, and silver/gold borders are excluded.
    #[must_use]
    pub fn is_traditional(&self) -> bool {
        if NON_TRADITIONAL_SET_TYPES.contains(&self.set_type.as_str()) {
            return false;
        }
        if NON_TRADITIONAL_LAYOUTS.contains(&self.layout.as_str()) {
            return false;
        }
        if self.set == "past" {
            return false;
        }
        if NON_TRADITIONAL_BORDERS.contains(&self.border_color.as_str()) {
            return false;
        }
        true
    }

    /// The `normal` image link, or empty when absent.
    #[must_use]
    pub fn image_uri(&self) -> &str {
        self.image_uris.as_ref().map_or("", |uris| uris.normal.as_str())
    }

    /// Views of the faces to process, in printed order.
    ///
    /// A card with `card_faces` yields one view per face; any other
    /// card yields a single view of itself.
    #[must_use]
    pub fn faces(&self) -> Vec<FaceView<'_>> {
        match &self.card_faces {
            Some(faces) => faces
                .iter()
                .map(|face| FaceView {
                    name: &face.name,
                    type_line: &face.type_line,
                    mana_cost: face.mana_cost.as_deref(),
                    power: face.power.as_deref(),
                    toughness: face.toughness.as_deref(),
                    keywords: &[],
                })
                .collect(),
            None => vec![FaceView {
                name: &self.name,
                type_line: &self.type_line,
                mana_cost: self.mana_cost.as_deref(),
                power: self.power.as_deref(),
                toughness: self.toughness.as_deref(),
                keywords: &self.keywords,
            }],
        }
    }
}
