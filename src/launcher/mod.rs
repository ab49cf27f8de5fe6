//! Rendering of stored resources into HTTP responses.
//!
//! Each resource type is served by one of a fixed set of launchers; link
//! resources redirect to their target, everything else is written out.

mod error;
mod kind;
mod registry;
mod render;

pub use error::{LaunchError, UnknownLauncher};
pub use kind::LauncherKind;
pub use registry::{LauncherRegistry, BUILTIN_LAUNCHERS};
pub use render::{
    launch, DumpLauncher, JavascriptLauncher, LaunchContext, LaunchResponse, Launcher,
    LinkLauncher, MAX_LAUNCH_DEPTH,
};

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
