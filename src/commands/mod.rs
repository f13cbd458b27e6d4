pub mod admin;
pub mod auth;
pub mod pages;
pub mod recommend;
pub mod system;
