pub mod cost;
pub mod enumerator;
pub mod error;
pub mod route;
