/*
 * Responsibility
 * - Public interface of the middleware layer (re-exports)
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
