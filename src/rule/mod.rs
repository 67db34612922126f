pub mod action;
pub mod condition;
pub mod definition;
pub mod repository;

pub use action::*;
pub use condition::*;
pub use definition::*;
pub use repository::*;
