#![warn(clippy::all, rust_2018_idioms)]

//! Finds SNS subscriptions whose SQS queue has been deleted and unsubscribes them.

pub mod aws;
pub mod cleaner;
pub mod client;
pub mod enumerator;
pub mod error;
pub mod model;
pub mod resolver;

pub use cleaner::Cleaner;
pub use error::BackendError;
pub use resolver::EndpointResolver;
