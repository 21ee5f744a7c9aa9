//! Server-rendered pages.
//!
//! Uses Askama templates for server-side rendering. Every page embeds the
//! push channel credentials so the browser can open its subscription.
//!
//! # Modules
//!
//! - [`context`] - Template context shared by all pages
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod context;
pub mod handlers;
pub mod routes;
