//! Capacity feed access.
//!
//! The upstream feed publishes the complete sailing schedule as a single
//! JSON document. This module provides the HTTP client that fetches it,
//! the feed error taxonomy, and a scripted mock producer for tests.

mod client;
mod error;
mod mock;

pub use client::{CapacityClient, CapacityClientConfig};
pub use error::CapacityError;
pub use mock::MockProducer;
