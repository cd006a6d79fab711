//! Lazily built destination and shadow tables.

use once_cell::sync::Lazy;

use crate::board::types::{Cell, Side, CELL_COUNT};

use super::{Destinations, Pattern};

const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

fn all_directions() -> impl Iterator<Item = (isize, isize)> {
    ORTHOGONAL.into_iter().chain(DIAGONAL)
}

fn step(cell: Cell, (dr, dc): (isize, isize)) -> Option<Cell> {
    Cell::offset(cell.row() as isize + dr, cell.col() as isize + dc)
}

/// Cells along a ray from `cell`, nearest first, ignoring occupancy.
fn ray(cell: Cell, dir: (isize, isize)) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut current = cell;
    while let Some(next) = step(current, dir) {
        cells.push(next);
        current = next;
    }
    cells
}

fn steps(cell: Cell, dirs: impl IntoIterator<Item = (isize, isize)>) -> Vec<Cell> {
    dirs.into_iter().filter_map(|dir| step(cell, dir)).collect()
}

fn slides(cell: Cell, dirs: impl IntoIterator<Item = (isize, isize)>) -> Vec<Cell> {
    dirs.into_iter().flat_map(|dir| ray(cell, dir)).collect()
}

fn build(pattern: Pattern, cell: Cell) -> Destinations {
    let (attacks, quiets) = match pattern {
        Pattern::King => {
            let s = steps(cell, all_directions());
            (s.clone(), s)
        }
        Pattern::Queen => {
            let s = slides(cell, all_directions());
            (s.clone(), s)
        }
        Pattern::Rook => {
            let s = slides(cell, ORTHOGONAL);
            (s.clone(), s)
        }
        Pattern::Bishop => {
            let diagonal = slides(cell, DIAGONAL);
            let mut quiets = diagonal.clone();
            quiets.extend(steps(cell, ORTHOGONAL));
            (diagonal, quiets)
        }
        Pattern::Knight => {
            let s = steps(cell, KNIGHT_JUMPS);
            (s.clone(), s)
        }
        Pattern::Pawn(side) => {
            let f = side.forward();
            (steps(cell, [(f, -1), (f, 1)]), steps(cell, [(f, 0)]))
        }
    };
    Destinations::new(attacks, quiets)
}

/// `DESTINATIONS[pattern.index() * CELL_COUNT + cell]`
pub(super) static DESTINATIONS: Lazy<Vec<Destinations>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(Pattern::COUNT * CELL_COUNT);
    for pattern in Pattern::ALL {
        for cell in Cell::all() {
            table.push(build(pattern, cell));
        }
    }
    table
});

/// `SHADOWS[origin][blocker]`: cells hidden behind `blocker` as seen from `origin`.
pub(super) static SHADOWS: Lazy<[[u32; CELL_COUNT]; CELL_COUNT]> = Lazy::new(|| {
    let mut shadows = [[0u32; CELL_COUNT]; CELL_COUNT];
    for origin in Cell::all() {
        for dir in all_directions() {
            let cells = ray(origin, dir);
            for (k, blocker) in cells.iter().enumerate() {
                shadows[origin.index()][blocker.index()] =
                    cells[k + 1..].iter().fold(0, |acc, c| acc | c.mask());
            }
        }
    }
    shadows
});

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> Cell {
        name.parse().unwrap()
    }

    #[test]
    fn rays_stop_at_the_edge() {
        let names: Vec<&str> = ray(cell("a1"), (1, 0)).into_iter().map(Cell::name).collect();
        assert_eq!(names, vec!["a2", "a3", "a4", "a5", "a6"]);
        assert!(ray(cell("e6"), (1, 1)).is_empty());
    }

    #[test]
    fn pawn_direction_depends_on_side() {
        let white = build(Pattern::Pawn(Side::White), cell("c3"));
        let black = build(Pattern::Pawn(Side::Black), cell("c3"));
        assert_eq!(white.quiet_mask, cell("c4").mask());
        assert_eq!(black.quiet_mask, cell("c2").mask());
        assert_eq!(white.attack_mask, cell("b4").mask() | cell("d4").mask());
        assert_eq!(black.attack_mask, cell("b2").mask() | cell("d2").mask());
    }
}
