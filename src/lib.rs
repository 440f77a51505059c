//! # DooTask API Client
//!
//! A typed async Rust client for the DooTask collaboration-platform API.
//!
//! ## Features
//!
//! - Token-authenticated requests with per-call timeout
//! - Typed request/response models for users, messages, dialogs, groups,
//!   projects, tasks, bots, and system settings
//! - TTL-bounded in-memory cache of the caller's own profile
//! - Uniform envelope handling with a precise error taxonomy
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use dootask_api::api::{MessageApi, UserApi};
//! use dootask_api::models::message::SendMessageToUserRequest;
//! use dootask_api::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("your-token")
//!         .with_server("http://localhost:2222")
//!         .with_timeout(Duration::from_secs(30));
//!     let client = Client::new(config);
//!
//!     // Verify the token and greet the caller
//!     let user = client.get_user_info(false).await?;
//!     println!("Hello, {}!", user.nickname);
//!
//!     // Send a markdown message to user 3
//!     client
//!         .send_message_to_user(SendMessageToUserRequest {
//!             userid: 3,
//!             text: "**hi**".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod models;

mod query;

pub use client::{Client, ClientConfig, RequestOptions, DEFAULT_SERVER};
pub use error::{ApiError, ApiResponse, ApiResult};
