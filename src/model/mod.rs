//! Plain data types shared by the actors, the stores, the service and the HTTP layer.

pub mod client;
pub mod history;

pub use client::*;
pub use history::*;
