pub mod code;
pub mod parse;
