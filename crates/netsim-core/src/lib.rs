//! # Netsim Core
//!
//! Shared types for the netsim routing topology.
//!
//! This crate holds what every other netsim crate agrees on:
//!
//! - **Types** — node positions, ordered edge records, forwarding tables
//! - **Errors** — the `NetsimError` taxonomy returned by fallible operations
//! - **Layout** — the `LayoutProvider` seam used when a topology is loaded
//!   from its persisted form and has no positions yet
//!
//! ## Quick Start
//!
//! ```rust
//! use netsim_core::prelude::*;
//!
//! let a = Position::new(0.0, 0.0);
//! let b = Position::new(3.0, 4.0);
//! assert_eq!(a.distance_to(&b), 5.0);
//! ```

pub mod types;
pub mod error;
pub mod layout;
pub mod prelude;
