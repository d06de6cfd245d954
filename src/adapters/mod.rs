pub mod complexity;
pub mod json;
