use proptest::prelude::*;
use std::collections::HashSet;

use crate::prelude::*;

fn live_set(grid: &Grid) -> HashSet<Pos> {
    grid.iter_enumerated()
        .filter(|&(_, cell)| cell != 0)
        .map(|(pos, _)| pos)
        .collect()
}

fn make_cell_coords_set(coords: Vec<Pos>) -> HashSet<Pos> {
    coords.into_iter().collect()
}

fn life(height: usize, width: usize, live: Vec<Pos>) -> PlaneAutomaton {
    PlaneAutomaton::new(Grid::with_live_cells(height, width, live).unwrap())
}

#[test]
fn test_lonely_cell_dies() {
    let mut a = life(5, 5, vec![(2, 2)]);
    assert_eq!(vec![(2, 2)], a.step());
    assert_eq!(0, a.population());
    assert!(a.step().is_empty());
    assert_eq!(2, a.generation());
}

#[test]
fn test_block_is_still() {
    let block = vec![(2, 2), (2, 3), (3, 2), (3, 3)];
    let mut a = life(6, 6, block.clone());
    let initial = a.grid().clone();
    for _ in 0..4 {
        assert!(a.step().is_empty());
        assert_eq!(&initial, a.grid());
    }
    assert_eq!(make_cell_coords_set(block), live_set(a.grid()));
}

#[test]
fn test_blinker_oscillates() {
    let horizontal = vec![(2, 1), (2, 2), (2, 3)];
    let vertical = vec![(1, 2), (2, 2), (3, 2)];
    let mut a = life(5, 5, horizontal.clone());
    for _ in 0..3 {
        assert_eq!(vec![(1, 2), (2, 1), (2, 3), (3, 2)], a.step());
        assert_eq!(make_cell_coords_set(vertical.clone()), live_set(a.grid()));
        assert_eq!(vec![(1, 2), (2, 1), (2, 3), (3, 2)], a.step());
        assert_eq!(make_cell_coords_set(horizontal.clone()), live_set(a.grid()));
    }
    assert_eq!(6, a.generation());
}

#[test]
fn test_corner_sees_opposite_corner() {
    // (0, 0) has exactly three live neighbors, all across an edge.
    let mut a = life(5, 7, vec![(4, 6), (4, 0), (0, 6)]);
    assert_eq!(3, a.grid().live_neighbors((0, 0)));
    a.step();
    assert_eq!(1, a.grid()[(0, 0)]);

    // Two diagonal corners with nothing else around both die.
    let mut a = life(5, 7, vec![(0, 0), (4, 6)]);
    assert_eq!(1, a.grid().live_neighbors((0, 0)));
    assert_eq!(1, a.grid().live_neighbors((4, 6)));
    assert_eq!(vec![(0, 0), (4, 6)], a.step());
}

#[test]
fn test_glider_wraps_around_torus() {
    let glider = vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    let mut a = life(8, 8, glider.clone());
    let initial = a.grid().clone();

    a.step();
    assert_eq!(
        make_cell_coords_set(vec![(1, 0), (1, 2), (2, 1), (2, 2), (3, 1)]),
        live_set(a.grid())
    );
    a.advance(3);
    assert_eq!(
        make_cell_coords_set(glider.iter().map(|&(h, w)| (h + 1, w + 1)).collect()),
        live_set(a.grid())
    );
    // The glider crosses every edge and returns to where it started.
    a.advance(32 - 4);
    assert_eq!(&initial, a.grid());
    assert_eq!(32, a.generation_count());
}

#[test]
fn test_tiny_grids() {
    // On a 1x1 torus the only cell is all 8 of its own neighbors.
    let mut a = life(1, 1, vec![(0, 0)]);
    assert_eq!(8, a.grid().live_neighbors((0, 0)));
    assert_eq!(vec![(0, 0)], a.step());
    assert!(a.step().is_empty());

    // On a 1x3 torus every column is counted three times, except the cell's
    // own column which is counted twice.
    let mut a = life(1, 3, vec![(0, 0), (0, 2)]);
    assert_eq!(6, a.grid().live_neighbors((0, 1)));
    assert_eq!(5, a.grid().live_neighbors((0, 0)));
    assert_eq!(vec![(0, 0), (0, 2)], a.step());
    assert_eq!(0, a.population());
}

#[test]
fn test_other_life_like_rule() {
    let rule: MooreTotalistic2D = "B1/S".parse().unwrap();
    let mut a = life(5, 5, vec![(2, 2)]).with_rule(rule);
    assert_eq!(9, a.step().len());
    assert_eq!(8, a.population());
    assert_eq!(0, a.grid()[(2, 2)]);
}

#[test]
fn test_construction_errors() {
    assert_eq!(
        Err(ConstructionError::EmptyGrid),
        PlaneAutomaton::from_rows(vec![])
    );
    assert_eq!(
        Err(ConstructionError::Ragged {
            row: 2,
            expected: 2,
            got: 3
        }),
        PlaneAutomaton::from_rows(vec![vec![0, 1], vec![1, 0], vec![0, 0, 0]])
    );
    assert_eq!(
        Err(ConstructionError::NonBinaryCell { index: 0, value: 9 }),
        PlaneAutomaton::from_rows(vec![vec![9]])
    );
}

#[test]
fn test_automaton_enum_plane() {
    let mut a: Automaton = life(5, 5, vec![(2, 1), (2, 2), (2, 3)]).into();
    assert_eq!(2, a.ndim());
    a.advance(5);
    assert_eq!(5, a.generation_count());
    assert_eq!(3, a.population());
    assert!(a.as_linear().is_none());
    assert_eq!(
        make_cell_coords_set(vec![(1, 2), (2, 2), (3, 2)]),
        live_set(a.as_plane().unwrap().grid())
    );
}

fn arbitrary_grid() -> impl Strategy<Value = Grid> {
    (1..10_usize, 1..10_usize).prop_flat_map(|(h, w)| {
        prop::collection::vec(0..=1_u8, h * w)
            .prop_map(move |data| Grid::from_flat(h, w, data).unwrap())
    })
}

proptest! {
    /// Tests that stepping twice is the same as stepping once, then building
    /// a fresh automaton from the result and stepping that once.
    #[test]
    fn test_life_determinism(grid in arbitrary_grid()) {
        let mut a = PlaneAutomaton::new(grid.clone());
        a.step();
        let first = a.grid().clone();
        let second_changes = a.step();

        let mut b = PlaneAutomaton::new(first);
        assert_eq!(second_changes, b.step());
        assert_eq!(a.grid(), b.grid());

        let mut c = PlaneAutomaton::new(grid);
        c.advance(2);
        assert_eq!(a.grid(), c.grid());
    }

    /// Tests that the changes reported by `step()` are exactly the cells that
    /// differ between generations, and that each cell follows the B3/S23
    /// rule.
    #[test]
    fn test_life_step_matches_rule(grid in arbitrary_grid()) {
        let mut a = PlaneAutomaton::new(grid.clone());
        let changed = a.step();
        assert_eq!(changed_cells(&grid, a.grid()).unwrap(), changed);
        for (pos, old) in grid.iter_enumerated() {
            let n = grid.live_neighbors(pos);
            let expected = match (old, n) {
                (0, 3) => 1,
                (1, 2) | (1, 3) => 1,
                _ => 0,
            };
            assert_eq!(expected, a.grid()[pos]);
        }
    }
}
