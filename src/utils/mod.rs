//! Utility modules for common functionality

pub mod logger;
pub mod record_utils;
