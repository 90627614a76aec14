//! Common infrastructure for the ascjwt crates
//!
//! Provides the `env_logger` bootstrap and the structured log helpers used
//! by the token generator. Identifiers are hashed before they reach a log
//! line and key material is never logged.

pub mod logging;

pub use logging::LoggingTransformer;
