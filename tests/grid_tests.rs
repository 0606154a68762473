use battleship_agent::{Grid, GridError, Point};

#[test]
fn test_zero_size_rejected() {
    assert_eq!(Grid::<u32>::zeroed(0).unwrap_err(), GridError::ZeroSize);
}

#[test]
fn test_get_set_and_bounds() {
    let mut grid = Grid::<i64>::zeroed(4).unwrap();
    grid.set(Point::new(1, 2), 7).unwrap();
    assert_eq!(grid.get(Point::new(1, 2)).unwrap(), 7);
    assert_eq!(grid.get(Point::new(2, 1)).unwrap(), 0);

    let err = grid.get(Point::new(4, 0)).unwrap_err();
    assert_eq!(err, GridError::IndexOutOfBounds { row: 4, col: 0 });
    assert!(grid.set(Point::new(0, 4), 1).is_err());
}

#[test]
fn test_add_sub_and_sum() {
    let mut grid = Grid::<i64>::filled(3, 2).unwrap();
    grid.add(Point::new(0, 0), 5).unwrap();
    grid.sub(Point::new(0, 1), 3).unwrap();
    let sum = grid
        .sum_over([Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)])
        .unwrap();
    assert_eq!(sum, 7 + -1 + 2);
}

#[test]
fn test_map_and_points() {
    let grid = Grid::from_fn(3, |p| (p.row * 3 + p.col) as u32).unwrap();
    let doubled = grid.map(|v| i64::from(v) * 2);
    assert_eq!(doubled.get(Point::new(2, 2)).unwrap(), 16);
    let points: Vec<_> = grid.points().collect();
    assert_eq!(points.len(), 9);
    assert_eq!(points[4], Point::new(1, 1));
    assert_eq!(grid.row(1).unwrap(), &[3, 4, 5]);
    assert!(grid.row(3).is_none());
}

#[test]
fn test_display() {
    let grid = Grid::from_fn(2, |p| p.row + p.col).unwrap();
    assert_eq!(grid.to_string(), "0 1\n1 2");
}
