//! Card renderer implementation - RowRecord → CardModel

use crate::types::{CellValue, Dataset, RowRecord};

/// Every card carries exactly this many star units.
pub const STAR_COUNT: usize = 5;

/// Image shown on a card.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Neutral gray 120x120 stand-in drawn by the template.
    Placeholder,
    /// The `Image Link` cell value, verbatim.
    Link(String),
}

/// One visual card, derived 1:1 from the row record at a fixed index.
///
/// Cards are destroyed and fully regenerated on every render pass; the index
/// is stable for the lifetime of one pass and correlates the exported PNG
/// back to its source record.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub index: usize,
    /// Stable identifier the export driver locates the card by.
    pub id: String,
    pub name: String,
    pub school: String,
    pub class: String,
    pub feedback: String,
    pub image: ImageSource,
    /// `true` = filled star, `false` = empty star.
    pub stars: [bool; STAR_COUNT],
}

/// Identifier for the card at a dataset index.
pub fn card_id(index: usize) -> String {
    format!("reviewCard_{index}")
}

/// Build the card model for one record. Text fields are copied verbatim;
/// a field absent from the record renders as an empty string.
pub fn render_card(record: &RowRecord, index: usize) -> CardModel {
    let image = match record.get("Image Link") {
        Some(cell) => {
            let link = cell.display();
            if link.is_empty() {
                ImageSource::Placeholder
            } else {
                ImageSource::Link(link)
            }
        }
        None => ImageSource::Placeholder,
    };

    CardModel {
        index,
        id: card_id(index),
        name: record.text("Name"),
        school: record.text("School"),
        class: record.text("Class"),
        feedback: record.text("Feedback"),
        image,
        stars: star_fill(parse_rating(record.get("Rating"))),
    }
}

/// Build one card per record, replacing any previously rendered set.
/// There is no incremental diffing: callers drop the old cards wholesale.
pub fn render_cards(dataset: &Dataset) -> Vec<CardModel> {
    dataset
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| render_card(record, index))
        .collect()
}

/// Permissive rating parse.
///
/// Text cells take the optional sign and leading decimal digits of the
/// trimmed value (`"4 stars"` → 4, `"4.7"` → 4); numeric cells truncate
/// toward zero. Anything else is treated as not-a-number.
pub fn parse_rating(cell: Option<&CellValue>) -> Option<i64> {
    match cell? {
        CellValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
        CellValue::Number(_) => None,
        CellValue::Text(s) => parse_leading_int(s),
        CellValue::Boolean(_) => None,
    }
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}

/// Star unit `i` is filled iff `i < rating`; a missing rating fills nothing.
/// Ratings above 5 fill all five units and negatives fill none - that falls
/// out of the comparison, there is no separate clamp.
pub fn star_fill(rating: Option<i64>) -> [bool; STAR_COUNT] {
    let mut stars = [false; STAR_COUNT];
    if let Some(rating) = rating {
        for (i, star) in stars.iter_mut().enumerate() {
            *star = (i as i64) < rating;
        }
    }
    stars
}
