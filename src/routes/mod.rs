mod generator;
mod health_check;

pub use generator::*;
pub use health_check::*;
