//! Territory engine.
//!
//! Frontier, enclosed-region and random-walk queries over a [`Grid`], parameterized
//! by an owner color. All queries are read-only; callers repaint the returned cells.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::game::{WALK_STALL_LIMIT, WALK_STEPS_PER_CELL};
use crate::game::grid::Grid;
use crate::game::types::Position;

/// Cells adjacent to `color`'s territory but not part of it, in row-major
/// order of discovery, without duplicates.
pub fn frontier(grid: &Grid, color: &str) -> Vec<Position> {
    let mut seen = vec![false; grid.len()];
    let mut result = Vec::new();

    for cell in grid.cells().filter(|cell| cell.is_owned_by(color)) {
        for pos in grid.neighbor_positions(cell.position()) {
            let index = grid.index(pos);
            if seen[index] || grid.is_owned_by(pos, color) {
                continue;
            }
            seen[index] = true;
            result.push(pos);
        }
    }
    result
}

/// Cells not owned by `color` that cannot reach the map edge without crossing
/// `color`, using 8-connectivity.
pub fn enclosed_region(grid: &Grid, color: &str) -> Vec<Position> {
    let mut outside = vec![false; grid.len()];
    let mut queue = VecDeque::new();

    // Seed with every edge cell the color does not own.
    for cell in grid.cells() {
        let pos = cell.position();
        if grid.is_edge(pos) && !cell.is_owned_by(color) {
            outside[grid.index(pos)] = true;
            queue.push_back(pos);
        }
    }

    while let Some(pos) = queue.pop_front() {
        for next in grid.neighbor_positions(pos) {
            let index = grid.index(next);
            if outside[index] || grid.is_owned_by(next, color) {
                continue;
            }
            outside[index] = true;
            queue.push_back(next);
        }
    }

    grid.cells()
        .filter(|cell| !cell.is_owned_by(color) && !outside[grid.index(cell.position())])
        .map(|cell| cell.position())
        .collect()
}

/// Grows a region of up to `target_count` distinct cells from `origin` with a
/// random walk over the Moore neighborhood, ignoring ownership.
///
/// The origin comes first in the result. The walk jumps to another painted
/// cell with unpainted neighbors after [`WALK_STALL_LIMIT`] steps without
/// growth, and once `target_count * WALK_STEPS_PER_CELL` steps are spent the
/// remainder is filled breadth-first from the painted region, so the result
/// always holds `min(target_count, reachable cells)` positions.
pub fn random_walk_grow<R: Rng + ?Sized>(
    grid: &Grid,
    origin: Position,
    target_count: usize,
    rng: &mut R,
) -> Vec<Position> {
    if target_count == 0 || grid.cell(origin).is_none() {
        return Vec::new();
    }

    let mut painted = vec![false; grid.len()];
    painted[grid.index(origin)] = true;
    let mut result = vec![origin];

    let budget = target_count.saturating_mul(WALK_STEPS_PER_CELL);
    let mut current = origin;
    let mut stalled = 0;
    let mut steps = 0;

    while result.len() < target_count && steps < budget {
        steps += 1;
        let neighbors = grid.neighbor_positions(current);
        let Some(&next) = neighbors.choose(rng) else {
            break;
        };
        current = next;

        let index = grid.index(next);
        if !painted[index] {
            painted[index] = true;
            result.push(next);
            stalled = 0;
            continue;
        }

        stalled += 1;
        if stalled >= WALK_STALL_LIMIT {
            let restarts = growth_points(grid, &painted, &result);
            match restarts.choose(rng) {
                Some(&restart) => {
                    current = restart;
                    stalled = 0;
                }
                None => break,
            }
        }
    }

    if result.len() < target_count {
        fill_breadth_first(grid, &mut painted, &mut result, target_count);
    }
    result
}

/// Painted cells that still touch an unpainted cell.
fn growth_points(grid: &Grid, painted: &[bool], region: &[Position]) -> Vec<Position> {
    region
        .iter()
        .copied()
        .filter(|&pos| {
            grid.neighbor_positions(pos)
                .into_iter()
                .any(|next| !painted[grid.index(next)])
        })
        .collect()
}

fn fill_breadth_first(
    grid: &Grid,
    painted: &mut [bool],
    region: &mut Vec<Position>,
    target_count: usize,
) {
    let mut cursor = 0;
    while cursor < region.len() && region.len() < target_count {
        let pos = region[cursor];
        cursor += 1;
        for next in grid.neighbor_positions(pos) {
            if region.len() >= target_count {
                break;
            }
            let index = grid.index(next);
            if !painted[index] {
                painted[index] = true;
                region.push(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const RED: &str = "#ff0000";

    fn ring(grid: &mut Grid, min: usize, max: usize, color: &str) {
        for i in min..=max {
            grid.paint(Position::new(i, min), color);
            grid.paint(Position::new(i, max), color);
            grid.paint(Position::new(min, i), color);
            grid.paint(Position::new(max, i), color);
        }
    }

    fn is_connected(grid: &Grid, cells: &[Position]) -> bool {
        let set: HashSet<Position> = cells.iter().copied().collect();
        let mut reached = HashSet::new();
        let mut stack = vec![cells[0]];
        while let Some(pos) = stack.pop() {
            if !reached.insert(pos) {
                continue;
            }
            for next in grid.neighbor_positions(pos) {
                if set.contains(&next) {
                    stack.push(next);
                }
            }
        }
        reached.len() == set.len()
    }

    #[test]
    fn test_frontier_of_single_cell() {
        let mut grid = Grid::new(10, 10);
        grid.paint(Position::new(5, 5), RED);
        let cells = frontier(&grid, RED);
        assert_eq!(cells.len(), 8);
        assert!(cells.iter().all(|&pos| !grid.is_owned_by(pos, RED)));
    }

    #[test]
    fn test_frontier_deduplicates_shared_neighbors() {
        let mut grid = Grid::new(10, 10);
        grid.paint(Position::new(4, 5), RED);
        grid.paint(Position::new(5, 5), RED);
        let cells = frontier(&grid, RED);
        let unique: HashSet<_> = cells.iter().collect();
        assert_eq!(unique.len(), cells.len());
        assert_eq!(cells.len(), 10);
    }

    #[test]
    fn test_frontier_empty_without_territory_or_with_full_grid() {
        let mut grid = Grid::new(4, 4);
        assert!(frontier(&grid, RED).is_empty());
        let all: Vec<Position> = grid.cells().map(|c| c.position()).collect();
        for pos in all {
            grid.paint(pos, RED);
        }
        assert!(frontier(&grid, RED).is_empty());
        assert!(enclosed_region(&grid, RED).is_empty());
    }

    #[test]
    fn test_enclosed_region_inside_ring() {
        let mut grid = Grid::new(10, 10);
        ring(&mut grid, 1, 8, RED);
        let enclosed = enclosed_region(&grid, RED);
        assert_eq!(enclosed.len(), 36);
        assert!(enclosed.iter().all(|p| (2..=7).contains(&p.x) && (2..=7).contains(&p.y)));
    }

    #[test]
    fn test_enclosed_region_leaks_through_gap() {
        let mut grid = Grid::new(10, 10);
        ring(&mut grid, 1, 8, RED);
        grid.paint(Position::new(1, 4), "#000000");
        assert!(enclosed_region(&grid, RED).is_empty());
    }

    #[test]
    fn test_diagonal_gap_does_not_seal() {
        // 8-connectivity lets the outside slip through a diagonal corner.
        let mut grid = Grid::new(5, 5);
        for pos in [(1, 2), (2, 1), (3, 2), (2, 3)] {
            grid.paint(Position::new(pos.0, pos.1), RED);
        }
        assert!(enclosed_region(&grid, RED).is_empty());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut grid = Grid::new(10, 10);
        ring(&mut grid, 2, 6, RED);
        grid.paint(Position::new(0, 0), RED);
        assert_eq!(frontier(&grid, RED), frontier(&grid, RED));
        assert_eq!(enclosed_region(&grid, RED), enclosed_region(&grid, RED));
    }

    #[test]
    fn test_random_walk_paints_exact_count() {
        let grid = Grid::new(10, 10);
        let origin = Position::new(5, 5);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cells = random_walk_grow(&grid, origin, 16, &mut rng);
            let unique: HashSet<_> = cells.iter().collect();
            assert_eq!(cells.len(), 16);
            assert_eq!(unique.len(), 16);
            assert_eq!(cells[0], origin);
            assert!(is_connected(&grid, &cells));
        }
    }

    #[test]
    fn test_random_walk_capped_by_grid_size() {
        let grid = Grid::new(3, 3);
        let mut rng = StdRng::seed_from_u64(7);
        let cells = random_walk_grow(&grid, Position::new(0, 0), 50, &mut rng);
        assert_eq!(cells.len(), 9);
    }

    #[test]
    fn test_random_walk_single_cell_grid() {
        let grid = Grid::new(1, 1);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            random_walk_grow(&grid, Position::new(0, 0), 16, &mut rng),
            vec![Position::new(0, 0)]
        );
    }

    #[test]
    fn test_random_walk_off_grid_origin() {
        let grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_walk_grow(&grid, Position::new(4, 1), 16, &mut rng).is_empty());
    }

    #[test]
    fn test_fill_breadth_first_completes_region() {
        let grid = Grid::new(6, 6);
        let origin = Position::new(0, 0);
        let mut painted = vec![false; grid.len()];
        painted[grid.index(origin)] = true;
        let mut region = vec![origin];
        fill_breadth_first(&grid, &mut painted, &mut region, 20);
        assert_eq!(region.len(), 20);
        assert!(is_connected(&grid, &region));
    }
}
