//! Common types shared by all procurement records

pub mod line_item;

pub use line_item::{LineItem, LineItemField};
