pub mod common;
pub mod inspection;
pub mod product;
pub mod purchase_order;
pub mod receiving;
pub mod requisition;
pub mod supplier;
