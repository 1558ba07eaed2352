//! Animetric Animation Engine
//!
//! Time-based interpolation between numeric vectors, driven frame-by-frame
//! through a controllable playback state machine.
//!
//! # Features
//!
//! - **Easing Catalog**: 30 named curves (sine through bounce, in/out/in-out)
//! - **Tick-Driven Playback**: the host clock pushes timestamps; the engine
//!   owns no clock and no threads
//! - **Lifecycle Signals**: ordered `play`/`update`/`complete`/`loop` events
//!   per tick
//! - **Multi-Axis Tweens**: interpolate whole vectors with per-axis direction
//!
//! # Example
//!
//! ```rust
//! use animetric::{Animetric, Easing};
//!
//! let mut engine = Animetric::new();
//! engine
//!     .from(&[0.0])
//!     .unwrap()
//!     .to(&[100.0])
//!     .unwrap()
//!     .duration(1000.0)
//!     .unwrap()
//!     .decimal(2)
//!     .unwrap()
//!     .ease(Easing::in_out_quad())
//!     .callable(|payload| println!("{:?}", payload.frames));
//!
//! engine.play().unwrap();
//! engine.tick(0.0);
//! engine.tick(500.0);
//! engine.tick(1000.0);
//! assert!(engine.completed());
//! ```

pub mod easing;
pub mod engine;

pub use easing::{Ease, EaseEvent, Easing, EasingFormula};
pub use engine::{Animetric, AnimetricOptions, AnimetricPayload, EngineEvent, PlayState};
