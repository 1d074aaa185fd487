use itertools::Itertools;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    g: Vec<T>,
}
pub type GridPos = (usize, usize);

pub struct GridPosIter<'a, T> {
    grid: &'a Grid<T>,
    next_index: Option<usize>,
}

impl<T> std::ops::Index<GridPos> for Grid<T> {
    type Output = T;
    fn index(&self, index: GridPos) -> &Self::Output {
        let i = self.cols * index.0 + index.1;
        &self.g[i]
    }
}

impl<T> std::ops::IndexMut<GridPos> for Grid<T> {
    fn index_mut(&mut self, index: GridPos) -> &mut Self::Output {
        let i = self.cols * index.0 + index.1;
        &mut self.g[i]
    }
}

impl<T> FromStr for Grid<T>
where
    T: FromStr,
    anyhow::Error: From<T::Err>,
{
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let g = s
            .lines()
            .flat_map(|l| l.chars().map(|c| c.to_string().parse::<T>()))
            .try_collect()?;
        let rows = s.lines().count();
        let cols = s
            .lines()
            .next()
            .map(|l| l.chars().count())
            .ok_or_else(|| anyhow::anyhow!("Row has no cells"))?;
        Ok(Grid { rows, cols, g })
    }
}

impl<T> std::fmt::Display for Grid<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{}", self[(r, c)])?;
            }
            if r != self.rows - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<'a, T> std::iter::Iterator for GridPosIter<'_, T> {
    type Item = GridPos;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_index
            .and_then(|i| if i < self.grid.g.len() { Some(i) } else { None })
            .map(|i| {
                let current_index = i;
                self.next_index = Some(i + 1);
                let r = current_index / self.grid.cols;
                let c = current_index % self.grid.cols;
                (r, c)
            })
    }
}

impl<T> Grid<T> {
    pub fn new(rows: usize, cols: usize, g: Vec<T>) -> Self {
        debug_assert_eq!(rows * cols, g.len());
        Grid { rows, cols, g }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn pos_iter(&self) -> GridPosIter<T> {
        GridPosIter {
            grid: self,
            next_index: Some(0),
        }
    }

    pub fn get(&self, pos: GridPos) -> Option<&T> {
        let r = pos.0;
        let c = pos.1;
        if r >= self.rows || c >= self.cols {
            return None;
        };
        Some(&self[pos])
    }

    pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut T> {
        let r = pos.0;
        let c = pos.1;
        if r >= self.rows || c >= self.cols {
            return None;
        };
        Some(&mut self[pos])
    }
}

impl<T: Copy> Grid<T> {
    /*
    1 2 3      3 6
    4 5 6  ->  2 5
               1 4
    0,0 -> 2,0  0,1 -> 1,0  0,2 -> 0,0
    1,0 -> 2,1  1,1 -> 1,1  1,2 -> 0,1
    */
    pub fn rotated_ccw(&self) -> Self {
        let mut g = Vec::with_capacity(self.g.len());
        for r in 0..self.cols {
            for c in 0..self.rows {
                g.push(self[(c, self.cols - 1 - r)]);
            }
        }
        Grid::new(self.cols, self.rows, g)
    }

    /// Mirror across the vertical axis: each row read right to left.
    pub fn mirrored(&self) -> Self {
        let mut g = Vec::with_capacity(self.g.len());
        for r in 0..self.rows {
            for c in 0..self.cols {
                g.push(self[(r, self.cols - 1 - c)]);
            }
        }
        Grid::new(self.rows, self.cols, g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Cell(u8);

    impl FromStr for Cell {
        type Err = anyhow::Error;
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let d = s
                .chars()
                .next()
                .and_then(|c| c.to_digit(10))
                .ok_or_else(|| anyhow::anyhow!("Not a digit"))?;
            Ok(Cell(d as u8))
        }
    }

    fn digits(s: &str) -> Grid<Cell> {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_index() {
        let mut g = digits("123\n456");
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 3);
        assert_eq!(g[(0, 0)], Cell(1));
        assert_eq!(g[(1, 2)], Cell(6));
        assert_eq!(g.get((2, 0)), None);
        assert_eq!(g.get((0, 3)), None);

        *g.get_mut((1, 1)).unwrap() = Cell(9);
        assert_eq!(g[(1, 1)], Cell(9));
        assert_eq!(g.get_mut((2, 0)), None);
    }

    #[test]
    fn test_pos_iter_covers_grid_row_major() {
        let g = digits("12\n34");
        let positions: Vec<_> = g.pos_iter().collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_rotated_ccw() {
        let g = digits("123\n456");
        let rotated = g.rotated_ccw();
        assert_eq!(rotated, digits("36\n25\n14"));

        let square = digits("12\n34");
        let four_turns = square
            .rotated_ccw()
            .rotated_ccw()
            .rotated_ccw()
            .rotated_ccw();
        assert_eq!(square, four_turns);
    }

    #[test]
    fn test_mirrored() {
        let g = digits("123\n456");
        assert_eq!(g.mirrored(), digits("321\n654"));
        assert_eq!(g.mirrored().mirrored(), g);
    }
}
