//! AccessControl - main API for gating requests
//!
//! The module is organized into:
//! - `types`: request/response types (AccessRequest, AccessResponse, CheckOptions)
//! - `snapshot`: immutable compiled configurations and the store that publishes them
//! - `engine`: the AccessControl implementation

mod engine;
mod snapshot;
mod types;

pub use engine::AccessControl;
pub use snapshot::PolicySnapshot;
pub use types::{AccessRequest, AccessResponse, CheckOptions};
