//! Middleware
//!
//! Side effects of the demo apps. Action logging comes from
//! `unistore::LoggingMiddleware`.

pub mod match_fetch_middleware;

pub use match_fetch_middleware::MatchFetchMiddleware;
