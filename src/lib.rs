//! Lazy-iterator utilities for looking ahead in a stream of values: a
//! peek/rewind protocol for deciding how to handle the current item based on
//! the items that follow it, an eager debug adapter for inspecting
//! pipelines, and a test-log filter built on the protocol.

pub mod debug;
pub mod lookahead;
pub mod outcome_filter;

pub use debug::DebugEager;
pub use lookahead::{IntoLookahead, Lookahead, LookaheadError, Peek};
