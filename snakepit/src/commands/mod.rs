pub mod contact;
pub mod snakes;
