pub mod clock;
pub mod page;
pub mod parse;
