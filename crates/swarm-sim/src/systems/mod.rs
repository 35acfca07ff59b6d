//! Systems that operate on the simulation world each step.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only queries). The pure policy functions they wrap live alongside
//! them and take no world at all, so they stay testable in isolation.

pub mod collision;
pub mod input;
pub mod movement;
pub mod seek;
pub mod snapshot;
pub mod spawner;
