pub mod account;
pub mod dog;
