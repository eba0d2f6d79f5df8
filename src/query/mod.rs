pub mod executor;
pub mod parser;

pub use executor::BooleanSearch;
pub use parser::{lex, parse, QueryToken};
