//! File I/O: JSON note store and timestamp encoding

mod store;
mod timestamp;

pub use store::{StoreError, init_store, load_notes, parse_notes, render_notes, save_notes};
pub use timestamp::{format_timestamp, parse_timestamp};
