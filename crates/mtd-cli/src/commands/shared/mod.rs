pub mod document;
pub mod input;
pub mod parse;
