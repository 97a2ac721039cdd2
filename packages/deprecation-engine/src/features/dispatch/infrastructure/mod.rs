pub mod overload_set;

pub use overload_set::{OverloadFn, OverloadSet};
