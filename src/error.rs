use crate::adjacency::Side;
use crate::tile::TileId;
use thiserror::Error;

/// Fatal defects of an input tile set. Any of these means the tiles do not
/// describe exactly one valid square mosaic, so the whole computation stops
/// with no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MosaicError {
    #[error("tile {id} is {rows}x{cols}, expected {expected}x{expected}")]
    TileSizeMismatch {
        id: TileId,
        rows: usize,
        cols: usize,
        expected: usize,
    },

    #[error("{count} tiles cannot fill a square mosaic")]
    NonSquareTileCount { count: usize },

    #[error("the {side} side of tile {id} matches {count} other tiles")]
    AmbiguousEdge {
        id: TileId,
        side: Side,
        count: usize,
    },

    #[error("tile {id} matches {count} neighbours, expected 2, 3 or 4")]
    UnclassifiableTile { id: TileId, count: usize },

    #[error("expected {expected} {role} tiles, found {found}")]
    RoleCountMismatch {
        role: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("expected exactly one neighbour on the {side} side of tile {id}, found {count}")]
    BrokenLink {
        id: TileId,
        side: Side,
        count: usize,
    },

    #[error("tiles {left_id} and {above_id} disagree on which tile comes next")]
    NeighbourDisagreement { left_id: TileId, above_id: TileId },

    #[error("tile {id} has {count} boundary sides where {expected} were expected")]
    OuterSideMismatch {
        id: TileId,
        count: usize,
        expected: usize,
    },

    #[error("no rotation and mirror of tile {id} fits its neighbours")]
    UnresolvableOrientation { id: TileId },

    #[error("tile {id} was placed twice")]
    DuplicatePlacement { id: TileId },
}
