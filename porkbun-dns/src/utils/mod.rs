//! Utility modules.

/// Serde helpers for fields Porkbun sends as either numbers or strings.
pub mod lenient;

/// Log sanitization utilities to prevent credential exposure.
pub mod log_sanitizer;
