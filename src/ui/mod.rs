// UI and formatting module

pub mod formatters;
pub mod report_json;
pub mod report_table;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_bytes, format_local_time, pad_to_width};
pub use report_json::{render_json, JsonReport};
pub use report_table::render_table;
