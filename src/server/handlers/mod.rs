//! Request handlers, one module per API surface.

pub mod appointments;
pub mod assessments;
pub mod chat;
pub mod health;
pub mod resources;
pub mod wellness;
