/*
 * Responsibility
 * - module tree for the walks API
 * - exported as a library so the router tests can build the app in-process
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
