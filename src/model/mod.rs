pub mod picker;
pub mod selection;
