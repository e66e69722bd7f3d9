pub mod extract;
pub mod parse;
