pub mod city;
pub mod error;
pub mod file;
pub mod random;
pub mod scenario;
