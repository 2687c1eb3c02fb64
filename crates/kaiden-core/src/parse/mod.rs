//! CSV input handling.
//!
//! - `split_csv_line` - quote-aware single-line tokenizer shared by both tables
//! - `parse_history` - e-amusement play history export parser
//! - `decode_text` - BOM stripping and Shift_JIS fallback for raw file bytes

mod fields;
mod history;
mod line;
mod text;

pub use fields::*;
pub use history::*;
pub use line::*;
pub use text::*;
