//! p2 director request handling.
//!
//! The director application owns all provisioning logic (resolution,
//! download, profile state); this module owns only the translation from a
//! declarative request to the director's flat argument list, and the
//! invocation boundary.

mod args;
mod request;
mod runner;

pub use args::DirectorArgsBuilder;
pub use request::{DirectorRequest, INSTALL_FEATURES_PROPERTY, InstallableUnit};
pub use runner::{DEFAULT_LAUNCHER, DIRECTOR_APPLICATION_ID, DirectorRunner};
