pub mod parse;
pub mod serialize;
