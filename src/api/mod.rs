//! API handlers for Libris REST endpoints

pub mod books;
pub mod health;
pub mod lending;
pub mod libraries;
pub mod members;
pub mod openapi;
