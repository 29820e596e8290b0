//! Plain data carriers exchanged with the service layer.

pub mod categories;
