use thiserror::Error;

/// Failures raised by the topology core.
///
/// Existence and reachability are reported independently: callers can
/// always tell "no such component" apart from "exists but nothing
/// routes to it".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("component not found: {0}")]
    ComponentNotFound(u32),
    #[error("no path from the internet to component {0}")]
    NoPathToComponent(u32),
}
