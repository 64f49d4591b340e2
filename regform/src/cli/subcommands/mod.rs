pub mod fields;
pub mod submit;
