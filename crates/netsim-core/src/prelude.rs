//! Netsim Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use netsim_core::prelude::*;
//! ```

pub use crate::types::{EdgeRecord, ForwardingTable, NodeName, Position, Weight};

pub use crate::layout::LayoutProvider;

pub use crate::error::{NetsimError, Result};
