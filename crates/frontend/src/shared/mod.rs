pub mod components;
pub mod data;
pub mod icons;
pub mod ids;
pub mod list_state;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
