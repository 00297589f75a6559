//! HTTP request handlers.
//!
//! This module contains all the endpoint handlers for the gateway API.

pub mod categories;
pub mod health;
pub mod hitl;
pub mod jobs;
