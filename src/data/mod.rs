pub mod picker;
pub mod reader;
