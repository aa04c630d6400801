//! Edge-based placement corrected for each child's anchor and pivot.
//!
//! A child's transform origin sits at `anchor * size - pivot` from its top-left
//! edge, so putting that edge at `offset` means positioning the child at
//! `offset + size * anchor + pivot` along each axis.

use stage_graphics::{Point, Size};

use crate::{Axis, CrossAlignment, GridSpec, ListSpec};

/// What placement needs to know about an already-rendered child.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ChildFrame {
    /// Logical size, not raw bounds.
    pub size: Size,
    /// Fractional anchor; zero for nodes without one.
    pub anchor: Point,
    pub pivot: Point,
}

impl ChildFrame {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn anchor(mut self, anchor: Point) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn pivot(mut self, pivot: Point) -> Self {
        self.pivot = pivot;
        self
    }

    fn leading(&self, axis: Axis, edge: f32) -> f32 {
        edge + axis.main_size(self.size) * axis.main(self.anchor) + axis.main(self.pivot)
    }

    fn cross_leading(&self, axis: Axis, edge: f32) -> f32 {
        edge + axis.cross_size(self.size) * axis.cross(self.anchor) + axis.cross(self.pivot)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ListPlacement {
    /// Child positions in the list container's space, in input order.
    pub positions: Vec<Point>,
    /// Final running offset minus the trailing spacing.
    pub main_extent: f32,
    /// Largest child cross size; zero for an empty list.
    pub cross_extent: f32,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct GridPlacement {
    pub positions: Vec<Point>,
    /// Uniform cell size shared by every child.
    pub cell: Size,
    pub rows: usize,
    pub columns: usize,
}

/// Stacks `children` along `axis` and aligns them on the cross axis.
pub fn place_list(axis: Axis, spec: &ListSpec, children: &[ChildFrame]) -> ListPlacement {
    let cross_extent = children
        .iter()
        .map(|child| axis.cross_size(child.size))
        .fold(0.0_f32, f32::max);
    log::debug!(
        "place_list {:?}: spacing={} padding={} align={:?} children={} max_cross={}",
        axis,
        spec.spacing,
        spec.padding,
        spec.align,
        children.len(),
        cross_extent
    );

    let mut offset = spec.padding;
    let mut positions = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        let main = child.leading(axis, offset);
        let cross = match spec.align {
            CrossAlignment::Start => child.cross_leading(axis, spec.padding),
            CrossAlignment::Center => spec.padding + cross_extent / 2.0,
            CrossAlignment::End => {
                let cross_size = axis.cross_size(child.size);
                spec.padding + cross_extent - cross_size * (1.0 - axis.cross(child.anchor))
                    + axis.cross(child.pivot)
            }
        };
        let position = axis.point(main, cross);
        log::debug!(
            "  child {}: size={:?} anchor={:?} pivot={:?} -> {:?}",
            index,
            child.size,
            child.anchor,
            child.pivot,
            position
        );
        positions.push(position);
        offset += axis.main_size(child.size) + spec.spacing;
    }

    let main_extent = if children.is_empty() {
        0.0
    } else {
        offset - spec.spacing
    };
    ListPlacement {
        positions,
        main_extent,
        cross_extent,
    }
}

/// Places `children` into uniform cells, row-major. `columns == 0` is treated as one column.
pub fn place_grid(spec: &GridSpec, children: &[ChildFrame]) -> GridPlacement {
    let columns = if spec.columns == 0 {
        log::warn!("grid columns must be positive; using 1");
        1
    } else {
        spec.columns
    };
    let cell = children.iter().fold(Size::ZERO, |max, child| {
        Size::new(max.width.max(child.size.width), max.height.max(child.size.height))
    });
    log::debug!(
        "place_grid: columns={} spacing={} cell={:?} children={}",
        columns,
        spec.spacing,
        cell,
        children.len()
    );

    let positions = children
        .iter()
        .enumerate()
        .map(|(index, child)| {
            let row = index / columns;
            let col = index % columns;
            let left = col as f32 * (cell.width + spec.spacing);
            let top = row as f32 * (cell.height + spec.spacing);
            Point::new(
                child.leading(Axis::Horizontal, left),
                child.leading(Axis::Vertical, top),
            )
        })
        .collect();

    GridPlacement {
        positions,
        cell,
        rows: children.len().div_ceil(columns),
        columns,
    }
}

#[cfg(test)]
#[path = "tests/placement_tests.rs"]
mod tests;
