//! Animetric Core Primitives
//!
//! This crate provides the foundational pieces shared by the animetric
//! animation engine:
//!
//! - **Signal Stacks**: Ordered publish/subscribe channels keyed by event kind
//! - **Numeric Rounding**: Decimal-precision rounding for frame values
//! - **Error Types**: Configuration validation errors
//!
//! # Example
//!
//! ```rust
//! use animetric_core::SignalStack;
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash)]
//! enum Channel {
//!     Change,
//! }
//!
//! let mut signal: SignalStack<Channel, f64> = SignalStack::new();
//! signal.listen(Channel::Change, |value| println!("got {value}"));
//! signal.dispatch(Channel::Change, &0.5);
//! ```

pub mod error;
pub mod numeric;
pub mod signal;

pub use error::{AnimetricError, Result};
pub use numeric::{round, MAX_DECIMAL};
pub use signal::{ListenerId, SignalStack};
