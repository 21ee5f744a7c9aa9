//! External integrations.

pub mod push;
