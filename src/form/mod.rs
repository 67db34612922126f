pub mod field;
pub mod value;

pub use field::*;
pub use value::*;
