//! Pure math/data for overlay positioning in Hoverkit
//!
//! This crate contains the geometry primitives, world-space bound pairs,
//! rectangle snapshots, and the corner projection that the Hoverkit
//! behaviors are built on.

mod bounds;
mod frame;
mod outline;
mod primitives;
mod projection;

pub use bounds::*;
pub use frame::*;
pub use outline::*;
pub use primitives::*;
pub use projection::*;

pub mod prelude {
    pub use crate::bounds::Bounds;
    pub use crate::frame::RectFrame;
    pub use crate::primitives::{Point, Size};
    pub use crate::projection::{EdgeDistances, Projection};
}
