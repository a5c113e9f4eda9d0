//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - auth: Requests, responses and the persisted session
//! - dashboard: Dashboard payload and view lifecycle
//! - form: Login/signup form state, reducer and validation
//! - route: Client-side routes

pub mod auth;
pub mod dashboard;
pub mod form;
pub mod route;

pub use auth::*;
pub use dashboard::*;
pub use form::*;
pub use route::*;
