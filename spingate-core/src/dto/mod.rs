//! Data Transfer Objects for the Gate pipeline endpoints
//!
//! DTOs are the request payloads whose wire shape is deliberately narrower
//! than the corresponding domain document.

pub mod pipeline;
