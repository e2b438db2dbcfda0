//! # Fest API
//!
//! HTTP surface of the fest registration backend: one-time code issuance
//! and verification, pass registration, and payment status updates.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
