//! Common component tests.


/// Access classification and trace formatting.
pub mod access_types;
