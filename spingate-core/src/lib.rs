//! Spingate Core
//!
//! Core types for the Spinnaker Gate pipeline API.
//!
//! This crate contains:
//! - Domain types: the pipeline documents Gate stores and the enumerated
//!   fields they carry
//! - DTOs: request payloads whose wire shape is narrower than the domain
//!   documents

pub mod domain;
pub mod dto;
