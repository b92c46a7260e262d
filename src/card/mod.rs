//! Card rendering module
//!
//! Turns validated row records into card models (pure data, testable without
//! a rendering backend) and card models into SVG markup for the exporter.

mod renderer;
pub mod svg;

pub use renderer::{card_id, parse_rating, render_card, render_cards, star_fill};
pub use renderer::{CardModel, ImageSource, STAR_COUNT};
