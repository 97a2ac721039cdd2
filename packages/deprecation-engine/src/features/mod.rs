//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations

pub mod qualifier;

pub mod placement;

// Static-analyzer surface over placement results
pub mod analysis;

pub mod runtime_wrapper;

// Overload resolution; reaches the runtime wrapper only after selection
pub mod dispatch;
