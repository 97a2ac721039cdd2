//! Overload Dispatch
//!
//! Type-based overload resolution, kept apart from deprecation signaling:
//! the runtime wrapper is only reached once a candidate is selected.

pub mod domain;
pub mod infrastructure;

pub use domain::{accepts, DispatchError};
pub use infrastructure::{OverloadFn, OverloadSet};
