//! Client configuration module

pub(crate) mod backend;
pub(crate) mod logging;

pub(crate) use backend::BackendConfig;
pub(crate) use logging::{LogFormat, LoggingConfig};
