//! Core domain types
//!
//! This module contains the pipeline document types exchanged with the Gate
//! API. They mirror the JSON documents the service stores; the client sends
//! and receives them verbatim and attaches no behavior of its own.

pub mod manifest;
pub mod pipeline;
