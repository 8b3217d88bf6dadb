#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;

pub mod extract;
pub mod handler;
pub mod middleware;
pub mod service;

pub use crate::error::{BoxedError, ServiceError, ServiceErrorKind, ServiceResult};

/// Tracing target for authentication events.
pub const TRACING_TARGET_AUTHENTICATION: &str = "manabi_server::authentication";
