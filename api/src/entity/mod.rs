//! SeaORM table models
//!
//! Persistence-layer models, kept separate from the domain entities in
//! `domain::entities`.

pub mod webinars;
