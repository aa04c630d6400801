//! Placement policies for stage-compose: stacked lists and uniform grids.
//!
//! Everything here is pure math over child frames; rendering children and
//! reading their logical sizes happens in `stage-ui`.

mod alignment;
mod axis;
mod placement;
mod spec;

pub use alignment::*;
pub use axis::*;
pub use placement::*;
pub use spec::*;

pub mod prelude {
    pub use crate::alignment::CrossAlignment;
    pub use crate::axis::Axis;
    pub use crate::placement::{place_grid, place_list, ChildFrame, GridPlacement, ListPlacement};
    pub use crate::spec::{GridSpec, ListSpec};
}
