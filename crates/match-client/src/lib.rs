//! Football match listing client
//!
//! This crate provides a trait-based client for the match listing endpoint,
//! so the match browser can be driven by the real HTTP implementation or by
//! a test double.
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │        MatchClient trait        │
//! │  - fetch_matches(page)          │
//! └─────────────────────────────────┘
//!                 │
//!                 ▼
//! ┌─────────────────────────────────┐
//! │ HttpMatchClient (reqwest)       │
//! │ GET {endpoint}?page={page}      │
//! └─────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use match_client::{HttpMatchClient, MatchClient};
//!
//! # async fn example() -> Result<(), match_client::FetchError> {
//! let client = HttpMatchClient::new("https://jsonmock.hackerrank.com/api/football_matches");
//! let matches = client.fetch_matches(2).await?;
//! println!("{} matches", matches.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use client::MatchClient;
pub use error::FetchError;
pub use http_client::{decode_page, HttpMatchClient};
pub use types::{FootballMatch, MatchPage};
