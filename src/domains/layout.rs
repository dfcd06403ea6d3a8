//! Text layouts of grid worlds. `%` is a wall, `P` the protagonist's start,
//! `.` a resource, `G` a threat, and a space is open floor.

use crate::adversarial::Position;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("row {row} is {found} cells wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {tile:?} at row {row}, column {column}")]
    UnknownTile {
        tile: char,
        row: usize,
        column: usize,
    },
    #[error("layout has no start position")]
    MissingStart,
    #[error("layout has a second start position at {0}")]
    MultipleStarts(Position),
    #[error("layout has {0} resources, a maze needs exactly one goal")]
    GoalCount(usize),
    #[error("failed to read layout {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    start: Position,
    resources: Vec<Position>,
    threats: Vec<Position>,
}

impl Layout {
    pub fn from_path(path: &Path) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path).map_err(|source| LayoutError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn resources(&self) -> &[Position] {
        &self.resources
    }

    pub fn threats(&self) -> &[Position] {
        &self.threats
    }

    /// Everything outside the grid counts as wall.
    pub fn is_wall(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 {
            return true;
        }
        let (x, y) = (position.x as usize, position.y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }
        self.walls[y * self.width + x]
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        // Rows of spaces are open floor, only surrounding empty lines go
        let mut rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .skip_while(|line| line.is_empty())
            .collect();
        while rows.last().is_some_and(|line| line.is_empty()) {
            rows.pop();
        }
        let width = rows.first().ok_or(LayoutError::Empty)?.chars().count();

        let mut walls = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut resources = vec![];
        let mut threats = vec![];
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, tile) in line.chars().enumerate() {
                let position = Position::new(column as i32, row as i32);
                walls.push(tile == '%');
                match tile {
                    '%' | ' ' => {}
                    '.' => resources.push(position),
                    'G' => threats.push(position),
                    'P' => {
                        if start.replace(position).is_some() {
                            return Err(LayoutError::MultipleStarts(position));
                        }
                    }
                    _ => return Err(LayoutError::UnknownTile { tile, row, column }),
                }
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            walls,
            start: start.ok_or(LayoutError::MissingStart)?,
            resources,
            threats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::test_layouts::*;

    #[test]
    fn parses_tiles() {
        let layout: Layout = SMALL_CHASE.parse().unwrap();
        assert_eq!(layout.width(), 7);
        assert_eq!(layout.height(), 5);
        assert_eq!(layout.start(), Position::new(1, 1));
        assert_eq!(
            layout.resources(),
            &[Position::new(5, 1), Position::new(3, 3)]
        );
        assert_eq!(layout.threats(), &[Position::new(5, 3)]);
        assert!(layout.is_wall(Position::new(0, 0)));
        assert!(layout.is_wall(Position::new(3, 2)));
        assert!(!layout.is_wall(Position::new(2, 1)));
        assert!(layout.is_wall(Position::new(-1, 1)));
        assert!(layout.is_wall(Position::new(1, 5)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = "%%%\n%P\n%%%".parse::<Layout>();
        assert!(matches!(
            result,
            Err(LayoutError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn rejects_unknown_tiles() {
        let result = "%%%\n%P?\n%%%".parse::<Layout>();
        assert!(matches!(
            result,
            Err(LayoutError::UnknownTile {
                tile: '?',
                row: 1,
                column: 2
            })
        ));
    }

    #[test]
    fn requires_exactly_one_start() {
        assert!(matches!(
            "%%%\n% .\n%%%".parse::<Layout>(),
            Err(LayoutError::MissingStart)
        ));
        assert!(matches!(
            "%%%%\n%PP%\n%%%%".parse::<Layout>(),
            Err(LayoutError::MultipleStarts(_))
        ));
        assert!(matches!("\n\n".parse::<Layout>(), Err(LayoutError::Empty)));
    }

    #[test]
    fn rows_of_spaces_are_open_floor() {
        let layout: Layout = "\nP  \n   \n  .\n\n".parse().unwrap();
        assert_eq!(layout.height(), 3);
        assert_eq!(layout.width(), 3);
        assert_eq!(layout.resources(), &[Position::new(2, 2)]);
        assert!(!layout.is_wall(Position::new(1, 1)));
    }

    #[test]
    fn empty_interior_line_is_ragged() {
        let result = "%%%\n%P%\n\n%%%".parse::<Layout>();
        assert!(matches!(
            result,
            Err(LayoutError::Ragged {
                row: 2,
                expected: 3,
                found: 0
            })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let directory = tempfile::tempdir().unwrap();
        let result = Layout::from_path(&directory.path().join("missing.lay"));
        assert!(matches!(result, Err(LayoutError::Read { .. })));
    }
}
