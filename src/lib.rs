#![doc = include_str!("../README.md")]

pub mod endpoint;

#[cfg(test)]
mod testing;

pub use crate::endpoint::{Endpoint, kind::EndpointKind};
