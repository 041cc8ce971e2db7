use crate::config::game::NEUTRAL_COLOR;
use crate::game::types::{Cell, MapSnapshot, Position};

/// Moore neighborhood offsets, diagonals included.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Fixed-size matrix of cells, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell neutral.
    pub fn new(width: usize, height: usize) -> Self {
        let cells = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| Cell {
                    x,
                    y,
                    color: NEUTRAL_COLOR.to_string(),
                })
            })
            .collect();
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of an in-bounds position.
    pub fn index(&self, pos: Position) -> usize {
        pos.y * self.width + pos.x
    }

    /// Converts raw coordinates, `None` when off-grid.
    pub fn position(&self, x: i64, y: i64) -> Option<Position> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then_some(Position { x, y })
    }

    /// The cell at (x, y), or `None` when off-grid.
    pub fn cell_at(&self, x: i64, y: i64) -> Option<&Cell> {
        self.position(x, y).and_then(|pos| self.cell(pos))
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        self.cells.get(self.index(pos))
    }

    pub fn is_owned_by(&self, pos: Position, color: &str) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_owned_by(color))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In-bounds Moore neighbors of `pos`, regardless of owner.
    pub fn neighbor_positions(&self, pos: Position) -> Vec<Position> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|(dx, dy)| self.position(pos.x as i64 + dx, pos.y as i64 + dy))
            .collect()
    }

    pub fn neighbors(&self, pos: Position) -> Vec<&Cell> {
        self.neighbor_positions(pos)
            .into_iter()
            .filter_map(|p| self.cell(p))
            .collect()
    }

    /// Positions on the outer ring of the grid.
    pub fn is_edge(&self, pos: Position) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x + 1 == self.width || pos.y + 1 == self.height
    }

    /// Sets the owner of `pos`. Returns the updated cell, `None` when off-grid.
    pub fn paint(&mut self, pos: Position, color: &str) -> Option<Cell> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        let index = self.index(pos);
        let cell = &mut self.cells[index];
        cell.color = color.to_string();
        Some(cell.clone())
    }

    pub fn count_color(&self, color: &str) -> usize {
        self.cells.iter().filter(|cell| cell.is_owned_by(color)).count()
    }

    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            width: self.width,
            height: self.height,
            pixels: self.cells.iter().map(|cell| cell.color.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_generation_size() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 20);
        assert_eq!(grid.len(), 200);
        assert!(grid.cells().all(|cell| cell.color == NEUTRAL_COLOR));
    }

    #[test]
    fn test_cell_at_off_grid() {
        let grid = Grid::new(10, 20);
        assert!(grid.cell_at(-1, 0).is_none());
        assert!(grid.cell_at(0, -1).is_none());
        assert!(grid.cell_at(10, 0).is_none());
        assert!(grid.cell_at(0, 20).is_none());
    }

    #[test]
    fn test_cell_at_matches_coordinates() {
        let grid = Grid::new(5, 7);
        for y in 0..7 {
            for x in 0..5 {
                let cell = grid.cell_at(x, y).expect("in bounds");
                assert_eq!((cell.x as i64, cell.y as i64), (x, y));
            }
        }
    }

    #[test]
    fn test_neighbor_counts() {
        let grid = Grid::new(10, 10);
        assert_eq!(grid.neighbors(Position::new(0, 0)).len(), 3);
        assert_eq!(grid.neighbors(Position::new(5, 0)).len(), 5);
        assert_eq!(grid.neighbors(Position::new(5, 5)).len(), 8);
        assert_eq!(grid.neighbors(Position::new(9, 9)).len(), 3);
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let grid = Grid::new(3, 3);
        let center = Position::new(1, 1);
        assert!(!grid.neighbor_positions(center).contains(&center));
    }

    #[test]
    fn test_paint_last_write_wins() {
        let mut grid = Grid::new(4, 4);
        let pos = Position::new(2, 3);
        grid.paint(pos, "#ff0000");
        let cell = grid.paint(pos, "#00ff00").expect("in bounds");
        assert_eq!(cell.color, "#00ff00");
        assert_eq!(grid.count_color("#ff0000"), 0);
        assert!(grid.paint(Position::new(4, 0), "#00ff00").is_none());
    }

    #[test]
    fn test_snapshot_is_row_major() {
        let mut grid = Grid::new(3, 2);
        grid.paint(Position::new(2, 0), "#aa0000");
        grid.paint(Position::new(0, 1), "#00bb00");
        let snapshot = grid.snapshot();
        assert_eq!(snapshot.width, 3);
        assert_eq!(snapshot.height, 2);
        assert_eq!(snapshot.pixels.len(), 6);
        assert_eq!(snapshot.pixels[2], "#aa0000");
        assert_eq!(snapshot.pixels[3], "#00bb00");
    }
}
