pub mod contact;
mod macros;
pub mod snake;
pub mod validation;
