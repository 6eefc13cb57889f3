//! Application layer
//!
//! Contains the use cases. Each use case validates a command against the
//! business rules, mutates the entity and persists through the repository
//! port. Validation always runs before mutation, so a failed command never
//! changes stored state.

pub mod change_seats;
pub mod organize_webinar;

pub use change_seats::{ChangeSeats, ChangeSeatsCommand};
pub use organize_webinar::{OrganizeWebinar, OrganizeWebinarCommand};
