pub mod connection;
pub mod error;
pub mod network;
pub mod station;
