use crate::error::MosaicError;
use crate::tile::{Pixel, Tile, TileId};
use derive_more::Display;
use itertools::Itertools;

pub type TileIndex = usize;

/// The cyclic side order every piece of rotation arithmetic indexes into.
/// Do not reorder.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq)]
pub enum Side {
    #[display(fmt = "right")]
    Right,
    #[display(fmt = "down")]
    Down,
    #[display(fmt = "left")]
    Left,
    #[display(fmt = "up")]
    Up,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Right, Side::Down, Side::Left, Side::Up];

    pub fn index(self) -> usize {
        match self {
            Side::Right => 0,
            Side::Down => 1,
            Side::Left => 2,
            Side::Up => 3,
        }
    }

    pub fn from_index(i: usize) -> Side {
        Side::ALL[i % 4]
    }
}

/// Border of `tile` on `side`, optionally reversed. Up reads left to right
/// and Right top to bottom; Left and Down read the opposite way, so that two
/// unflipped sequences compare equal exactly when the tiles touch without a
/// mirror between them.
pub fn edge(tile: &Tile, side: Side, flip: bool) -> Vec<Pixel> {
    let n = tile.pixels.rows();
    let (mut seq, reversed): (Vec<Pixel>, bool) = match side {
        Side::Right => ((0..n).map(|r| tile.pixels[(r, n - 1)]).collect(), flip),
        Side::Down => ((0..n).map(|c| tile.pixels[(n - 1, c)]).collect(), !flip),
        Side::Left => ((0..n).map(|r| tile.pixels[(r, 0)]).collect(), !flip),
        Side::Up => ((0..n).map(|c| tile.pixels[(0, c)]).collect(), flip),
    };
    if reversed {
        seq.reverse();
    }
    seq
}

/// Which tile/side pairs share an identical border with each side of each
/// tile. Built once over all unordered tile pairs, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Adjacency {
    ids: Vec<TileId>,
    links: Vec<[Vec<(TileIndex, Side)>; 4]>,
}

impl Adjacency {
    pub fn build(tiles: &[Tile]) -> Result<Adjacency, MosaicError> {
        let expected = tiles.first().map(|t| t.pixels.rows()).unwrap_or(0);
        for tile in tiles {
            if tile.pixels.rows() != expected || tile.pixels.cols() != expected {
                return Err(MosaicError::TileSizeMismatch {
                    id: tile.id,
                    rows: tile.pixels.rows(),
                    cols: tile.pixels.cols(),
                    expected,
                });
            }
        }

        let mut links: Vec<[Vec<(TileIndex, Side)>; 4]> = vec![Default::default(); tiles.len()];
        for (i, j) in (0..tiles.len()).tuple_combinations() {
            for &side_i in Side::ALL.iter() {
                let edge_i = edge(&tiles[i], side_i, false);
                for &side_j in Side::ALL.iter() {
                    // A palindromic border would match under both flip
                    // states; record the pairing once.
                    let is_match = [false, true]
                        .iter()
                        .any(|&flip| edge_i == edge(&tiles[j], side_j, flip));
                    if is_match {
                        links[i][side_i.index()].push((j, side_j));
                        links[j][side_j.index()].push((i, side_i));
                    }
                }
            }
        }

        Ok(Adjacency {
            ids: tiles.iter().map(|t| t.id).collect(),
            links,
        })
    }

    pub fn tile_count(&self) -> usize {
        self.links.len()
    }

    pub fn id(&self, tile: TileIndex) -> TileId {
        self.ids[tile]
    }

    pub fn neighbours(&self, tile: TileIndex, side: Side) -> &[(TileIndex, Side)] {
        &self.links[tile][side.index()]
    }

    /// Total matched sides of a tile: 2, 3 and 4 mean corner, border and
    /// interior piece.
    pub fn degree(&self, tile: TileIndex) -> usize {
        self.links[tile].iter().map(Vec::len).sum()
    }

    /// The unique tile reachable over `side`, along with the matching side
    /// in that tile's own frame.
    pub fn follow(&self, tile: TileIndex, side: Side) -> Result<(TileIndex, Side), MosaicError> {
        let candidates = self.neighbours(tile, side);
        if candidates.len() == 1 {
            Ok(candidates[0])
        } else {
            Err(MosaicError::BrokenLink {
                id: self.id(tile),
                side,
                count: candidates.len(),
            })
        }
    }

    /// Sides that match no other tile and therefore belong on the outer
    /// boundary of the mosaic.
    pub fn outer_sides(&self, tile: TileIndex) -> Result<Vec<Side>, MosaicError> {
        let mut outer = Vec::new();
        for &side in Side::ALL.iter() {
            match self.neighbours(tile, side).len() {
                0 => outer.push(side),
                1 => (),
                count => {
                    return Err(MosaicError::AmbiguousEdge {
                        id: self.id(tile),
                        side,
                        count,
                    })
                }
            }
        }
        Ok(outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::synthetic;
    use crate::tile::parse_tiles;

    const TILE_1951: &str = "Tile 1951:
#.##...##.
#.####...#
.....#..##
#...######
.##.#....#
.###.#####
###.##.##.
.###....#.
..#.#..#.#
#...##.#..";

    const TILE_2311: &str = "Tile 2311:
..##.#..#.
##..#.....
#...##..#.
####.#...#
##.##.###.
##...#.###
.#.#.#..##
..#....#..
###...#.#.
..###..###";

    fn edge_str(tile: &Tile, side: Side, flip: bool) -> String {
        edge(tile, side, flip)
            .iter()
            .map(|p| format!("{}", p))
            .collect()
    }

    #[test]
    fn test_edge_extraction() {
        let tile = TILE_2311.parse::<Tile>().unwrap();

        assert_eq!(edge_str(&tile, Side::Up, false), "..##.#..#.");
        assert_eq!(edge_str(&tile, Side::Right, false), "...#.##..#");
        // Down and Left read against the natural scan order.
        assert_eq!(edge_str(&tile, Side::Down, false), "###..###..");
        assert_eq!(edge_str(&tile, Side::Left, false), ".#..#####.");

        assert_eq!(edge_str(&tile, Side::Up, true), ".#..#.##..");
        assert_eq!(edge_str(&tile, Side::Down, true), "..###..###");
        assert_eq!(edge_str(&tile, Side::Left, true), ".#####..#.");
        assert_eq!(edge_str(&tile, Side::Right, true), "#..##.#...");
    }

    #[test]
    fn test_build_links_touching_tiles() {
        let input = format!("{}\n\n{}", TILE_1951, TILE_2311);
        let tiles = parse_tiles(&input).unwrap();
        let adjacency = Adjacency::build(&tiles).unwrap();

        assert_eq!(adjacency.neighbours(0, Side::Right), &[(1, Side::Left)]);
        assert_eq!(adjacency.neighbours(1, Side::Left), &[(0, Side::Right)]);
        assert_eq!(adjacency.degree(0), 1);
        assert_eq!(adjacency.degree(1), 1);

        assert_eq!(adjacency.follow(0, Side::Right).unwrap(), (1, Side::Left));
        assert_eq!(
            adjacency.follow(0, Side::Up),
            Err(MosaicError::BrokenLink {
                id: 1951,
                side: Side::Up,
                count: 0
            })
        );
        assert_eq!(
            adjacency.outer_sides(1).unwrap(),
            vec![Side::Right, Side::Down, Side::Up]
        );
    }

    #[test]
    fn test_build_rejects_mismatched_tile_sizes() {
        let input = format!("{}\n\nTile 3:\n#.\n.#", TILE_1951);
        let tiles = parse_tiles(&input).unwrap();
        assert_eq!(
            Adjacency::build(&tiles).unwrap_err(),
            MosaicError::TileSizeMismatch {
                id: 3,
                rows: 2,
                cols: 2,
                expected: 10,
            }
        );
    }

    #[test]
    fn test_duplicate_borders_are_ambiguous() {
        let twin = TILE_2311.replace("2311", "2312");
        let input = format!("{}\n\n{}\n\n{}", TILE_1951, TILE_2311, twin);
        let tiles = parse_tiles(&input).unwrap();
        let adjacency = Adjacency::build(&tiles).unwrap();

        assert_eq!(adjacency.neighbours(0, Side::Right).len(), 2);
        assert!(matches!(
            adjacency.outer_sides(0),
            Err(MosaicError::AmbiguousEdge {
                id: 1951,
                side: Side::Right,
                count: 2,
            })
        ));
        assert!(adjacency.follow(0, Side::Right).is_err());
    }

    #[test]
    fn test_links_are_symmetric() {
        let content = synthetic::fingerprint(4, 10, 5);
        let mosaic = synthetic::scrambled(&content, 10, 5);
        let adjacency = Adjacency::build(&mosaic.tiles).unwrap();

        for tile in 0..adjacency.tile_count() {
            for &side in Side::ALL.iter() {
                for &(other, other_side) in adjacency.neighbours(tile, side) {
                    assert!(adjacency
                        .neighbours(other, other_side)
                        .contains(&(tile, side)));
                }
            }
        }
    }
}
