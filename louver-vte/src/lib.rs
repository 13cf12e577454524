mod actor;
mod enums;
mod params;
mod parser;
mod transitions;

pub use actor::Actor;
pub use params::{Params, ParamsIter};
pub use parser::Parser;
