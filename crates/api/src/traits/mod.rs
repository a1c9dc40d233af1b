//! Trait definitions for the kemlock binding layer

pub mod provider;

pub use provider::KemProvider;
