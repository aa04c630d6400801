use super::*;

fn column_children() -> Vec<ChildFrame> {
    vec![
        ChildFrame::new(Size::new(30.0, 30.0)),
        ChildFrame::new(Size::new(60.0, 60.0)),
        ChildFrame::new(Size::new(45.0, 45.0)),
    ]
}

#[test]
fn column_stacks_with_spacing() {
    let placement = place_list(Axis::Vertical, &ListSpec::default(), &column_children());
    let ys: Vec<f32> = placement.positions.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![0.0, 40.0, 110.0]);
    assert_eq!(placement.main_extent, 155.0);
    assert_eq!(placement.cross_extent, 60.0);
    assert!(placement.positions.iter().all(|p| p.x == 0.0));
}

#[test]
fn row_applies_padding_on_both_axes() {
    let spec = ListSpec::new().spacing(5.0).padding(8.0);
    let placement = place_list(Axis::Horizontal, &spec, &column_children());
    assert_eq!(placement.positions[0], Point::new(8.0, 8.0));
    assert_eq!(placement.positions[1], Point::new(43.0, 8.0));
    assert_eq!(placement.positions[2], Point::new(108.0, 8.0));
}

#[test]
fn center_alignment_shares_one_center_line() {
    let spec = ListSpec::new().align(CrossAlignment::Center);
    let children: Vec<ChildFrame> = column_children()
        .into_iter()
        .map(|child| child.anchor(Point::splat(0.5)))
        .collect();
    let placement = place_list(Axis::Vertical, &spec, &children);
    assert!(placement.positions.iter().all(|p| p.x == 30.0));
}

#[test]
fn end_alignment_puts_trailing_edges_together() {
    let spec = ListSpec::new().align(CrossAlignment::End);
    let placement = place_list(Axis::Vertical, &spec, &column_children());
    let trailing: Vec<f32> = placement
        .positions
        .iter()
        .zip(column_children())
        .map(|(p, child)| p.x + child.size.width)
        .collect();
    assert_eq!(trailing, vec![60.0, 60.0, 60.0]);
}

#[test]
fn anchor_and_pivot_shift_positions_to_edges() {
    let centered_pivot = ChildFrame::new(Size::new(120.0, 40.0)).pivot(Point::new(60.0, 20.0));
    let centered_anchor = ChildFrame::new(Size::new(100.0, 50.0)).anchor(Point::splat(0.5));
    let placement = place_list(
        Axis::Vertical,
        &ListSpec::default(),
        &[centered_pivot, centered_anchor],
    );
    assert_eq!(placement.positions[0], Point::new(60.0, 20.0));
    assert_eq!(placement.positions[1], Point::new(50.0, 75.0));
}

#[test]
fn empty_list_has_zero_extent() {
    let placement = place_list(Axis::Horizontal, &ListSpec::default(), &[]);
    assert!(placement.positions.is_empty());
    assert_eq!(placement.main_extent, 0.0);
    assert_eq!(placement.cross_extent, 0.0);
}

#[test]
fn grid_maps_indices_row_major() {
    let children: Vec<ChildFrame> = (0..6)
        .map(|i| ChildFrame::new(Size::new(10.0 + i as f32, 20.0)))
        .collect();
    let placement = place_grid(&GridSpec::new().columns(3), &children);
    assert_eq!(placement.cell, Size::new(15.0, 20.0));
    assert_eq!(placement.rows, 2);
    let rows: Vec<f32> = placement.positions.iter().map(|p| p.y).collect();
    let cols: Vec<f32> = placement.positions.iter().map(|p| p.x).collect();
    assert_eq!(rows, vec![0.0, 0.0, 0.0, 30.0, 30.0, 30.0]);
    assert_eq!(cols, vec![0.0, 25.0, 50.0, 0.0, 25.0, 50.0]);
}

#[test]
fn grid_with_zero_columns_uses_one() {
    let children = column_children();
    let placement = place_grid(&GridSpec::new().columns(0), &children);
    assert_eq!(placement.columns, 1);
    assert_eq!(placement.rows, 3);
    assert!(placement.positions.iter().all(|p| p.x == 0.0));
}

#[test]
fn empty_grid_has_zero_cell() {
    let placement = place_grid(&GridSpec::default(), &[]);
    assert_eq!(placement.cell, Size::ZERO);
    assert_eq!(placement.rows, 0);
    assert!(placement.positions.iter().all(|p| !p.x.is_nan()));
}
