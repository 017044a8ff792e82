pub mod format;

pub use format::{class_names, format_currency, format_date};
