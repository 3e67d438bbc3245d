//! Adaptive response delivery.
//!
//! # Data Flow
//! ```text
//! Request
//!     → mode.rs (classify: FullPage | FragmentSwap | StreamUpdate)
//!     → page render (all targets, in memory)
//!     → dispatch.rs (select + wrap targets for the mode)
//!         FullPage / FragmentSwap → text/html body
//!         StreamUpdate            → stream.rs (event stream of merges)
//! ```
//!
//! # Design Decisions
//! - The page never sees the mode; only the dispatcher does
//! - Nothing is written until the render has fully succeeded

pub mod dispatch;
pub mod mode;
pub mod stream;

pub use dispatch::{dispatch, DispatchError};
pub use mode::{DeliveryMode, RequestClassifier, HX_REQUEST};
pub use stream::{FragmentStream, MergeFragment, MergeMode, StreamHandle};
