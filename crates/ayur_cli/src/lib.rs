//! Input parsing and English locale for the chart analysis CLI.

pub mod input;
pub mod locale_en;

pub use input::{PositionSpec, build_chart, parse_graha, parse_position, whole_sign_house};
pub use locale_en::EnglishLocale;
