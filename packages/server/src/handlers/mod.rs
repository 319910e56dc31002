pub mod admin;
pub mod auth;
pub mod dog;
pub mod upload;
