//! Feature Operations
//!
//! Turn sketches into solid bodies and modify existing bodies:
//! - Extrude: every profile of a finished sketch becomes a new body
//! - Chamfer: a box body is replaced by a beveled prism

mod chamfer;
mod extrude;

pub use chamfer::{chamfer, chamfered};
pub use extrude::{extrude, extrude_into, extrude_profile};
