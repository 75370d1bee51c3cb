pub mod api;
pub mod auth;
pub mod components;
pub mod interop;
pub mod notebook;
pub mod notices;
pub mod pages;
pub mod session;

pub use pages::home::HomePage;
