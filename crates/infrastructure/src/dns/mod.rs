pub mod client;
pub mod forwarding;
pub mod transport;

pub use client::{ResolverClient, DEFAULT_QUERY_TIMEOUT};
