// patterns.rs - Well-known seed shapes, applied through the grid's seeding path

use crate::cell::Coord;
use crate::grid::Grid;

/// A named shape. Cells are in cell units, anchored at the shape's
/// top-left corner; `apply_pattern` scales and centers them for a
/// concrete board.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

/// Clears the board, then seeds the shape centered on it. Shapes wider
/// than the board lose their off-board cells.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();

    let side = grid.side();
    let cells_per_axis = grid.extent() / side;
    let width = pattern.cells.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
    let height = pattern.cells.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
    let offset_x = ((cells_per_axis - width) / 2).max(0);
    let offset_y = ((cells_per_axis - height) / 2).max(0);

    let coords: Vec<Coord> = pattern
        .cells
        .iter()
        .map(|&(x, y)| ((offset_x + x) * side, (offset_y + y) * side))
        .collect();
    grid.set_live_cells(&coords);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dead_grid(extent: i32, side: i32) -> Grid {
        Grid::new(extent, side, 1.0).unwrap()
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, pattern) in PATTERNS.iter().enumerate() {
            assert!(!pattern.cells.is_empty());
            for other in &PATTERNS[i + 1..] {
                assert_ne!(pattern.name, other.name);
            }
        }
    }

    #[test]
    fn every_pattern_fits_a_fifty_cell_board() {
        for pattern in PATTERNS {
            let mut grid = dead_grid(50, 1);
            apply_pattern(&mut grid, pattern);
            assert_eq!(grid.live_count(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn apply_replaces_the_previous_seed() {
        let mut grid = dead_grid(50, 1);
        grid.set_live_cells(&[(0, 0), (49, 49)]);
        apply_pattern(&mut grid, &PATTERNS[0]);
        assert_eq!(grid.live_count(), PATTERNS[0].cells.len());
        assert!(!grid.is_alive((0, 0)));
    }

    #[test]
    fn blinker_is_centered_and_scaled_by_side() {
        // 5x5 board of 10px cells; the 3x1 blinker centers at cell row 2.
        let mut grid = dead_grid(50, 10);
        let blinker = PATTERNS.iter().find(|p| p.name == "Blinker").unwrap();
        apply_pattern(&mut grid, blinker);
        assert!(grid.is_alive((10, 20)));
        assert!(grid.is_alive((20, 20)));
        assert!(grid.is_alive((30, 20)));
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn oversized_patterns_are_clipped_not_rejected() {
        let mut grid = dead_grid(4, 1);
        let pulsar = PATTERNS.iter().find(|p| p.name == "Pulsar").unwrap();
        apply_pattern(&mut grid, pulsar);
        assert!(grid.live_count() < pulsar.cells.len());
    }

    #[test]
    fn glider_population_is_preserved_while_it_travels() {
        let mut grid = dead_grid(30, 1);
        let glider = PATTERNS.iter().find(|p| p.name == "Glider").unwrap();
        apply_pattern(&mut grid, glider);
        // A free glider keeps its five cells through every step of its
        // four-step translation cycle.
        for _ in 0..8 {
            grid.step();
            assert_eq!(grid.live_count(), 5);
        }
    }
}
