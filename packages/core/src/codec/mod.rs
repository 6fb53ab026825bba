//! Tree/flat status codec
//!
//! Devices report status as a flat map of absolute keys to leaf values.
//! Consumers want nested JSON. This module folds between the two and reads
//! typed values out of the flat form.

mod extract;
mod tree;

pub use extract::{extract, extract_list, extract_list_as};
pub use tree::{ID_FIELD, VALUE_FIELD, to_tree};
