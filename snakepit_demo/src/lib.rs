pub mod contact;
pub mod snake;
