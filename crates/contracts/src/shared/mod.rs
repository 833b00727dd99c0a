pub mod assistant;
pub mod list;
pub mod store;
