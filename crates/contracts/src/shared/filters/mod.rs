pub mod api;
pub mod bucket;
pub mod counter;
pub mod dates;
pub mod engine;
pub mod error;
pub mod field;
pub mod record;
pub mod rules;
pub mod state;
pub mod values;

pub use bucket::*;
pub use counter::*;
pub use engine::{filter, PredicateEngine};
pub use error::FilterError;
pub use field::*;
pub use record::*;
pub use rules::*;
pub use state::*;
pub use values::*;
