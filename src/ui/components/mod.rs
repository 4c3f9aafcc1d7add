//! Widgets drawn by the search screen.

pub mod alert;
/// Single-line query field.
pub mod input;
/// Prompt, input and search button row.
pub mod prompt;
pub mod results;
pub mod status;
pub mod suggestions;

pub use alert::render_alert;
pub use input::SearchInput;
pub use prompt::{InputAreas, InputContext, render_input_row};
pub use results::{ROWS_PER_HIT, ResultsContext, render_results};
pub use status::{StatusContext, render_status};
pub use suggestions::{build_suggestion_items, dropdown_area, render_suggestions};
