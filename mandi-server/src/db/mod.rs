//! Data layer: models and repositories over the record store

pub mod models;
pub mod repository;
