//! Attack-surface flow analysis.
//!
//! Models a network of components as a directed graph rooted at a
//! synthetic node representing the internet (id 0) and answers
//! minimum-hop reachability queries against it. A component is
//! internet-facing exactly when a directed path from the root
//! reaches it.

pub mod error;
pub mod flow;
pub mod server;
pub mod store;
