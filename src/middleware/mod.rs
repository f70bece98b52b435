/*
 * Responsibility
 * - public surface of the middleware layer
 */
pub mod cors;
pub mod http;
pub mod require_role;
pub mod security_headers;
