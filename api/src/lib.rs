//! # MailAuth API
//!
//! HTTP layer of the MailAuth backend: routing, request/response DTOs,
//! the session cookie, and the authentication extractor. All business
//! rules live in the core crate; handlers translate between HTTP and
//! the account lifecycle service.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
