//! Serve "semi-static" pages: templates that need rendering but no
//! per-page handler code.
//!
//! A request for `/about` renders `{folder_path}/about.{file_ext}` when that
//! file exists, and falls through to the next handler when it does not. The
//! middleware is installed on an [`axum::Router`] with
//! [`axum::middleware::from_fn_with_state`]:
//!
//! ```no_run
//! use std::sync::Arc;
//! use axum::{middleware, Router};
//! use semi_static::{serve_semi_static, Config};
//!
//! let app: Router = Router::new()
//!     .fallback(|| async { "no such page" })
//!     .layer(middleware::from_fn_with_state(
//!         Arc::new(Config::default()),
//!         serve_semi_static,
//!     ));
//! ```

pub mod config;
pub mod error;
pub mod pages;
pub mod render;

pub use config::Config;
pub use error::PageError;
pub use pages::serve_semi_static;
