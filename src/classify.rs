use crate::adjacency::{Adjacency, TileIndex};
use crate::error::MosaicError;
use num_integer::Roots;

/// Tiles partitioned by the role their neighbour count forces on them.
#[derive(Debug, Clone)]
pub struct Classification {
    pub mosaic_side: usize,
    pub corners: Vec<TileIndex>,
    pub borders: Vec<TileIndex>,
    pub interiors: Vec<TileIndex>,
}

/// Partition tiles into corner, border and interior pieces by their total
/// matched-side count, and validate the totals against the combinatorics of
/// a square mosaic.
pub fn classify(adjacency: &Adjacency) -> Result<Classification, MosaicError> {
    let count = adjacency.tile_count();
    let mosaic_side = count.sqrt();
    if mosaic_side * mosaic_side != count {
        return Err(MosaicError::NonSquareTileCount { count });
    }

    let mut corners = Vec::new();
    let mut borders = Vec::new();
    let mut interiors = Vec::new();
    for tile in 0..count {
        match adjacency.degree(tile) {
            2 => corners.push(tile),
            3 => borders.push(tile),
            4 => interiors.push(tile),
            degree => {
                return Err(MosaicError::UnclassifiableTile {
                    id: adjacency.id(tile),
                    count: degree,
                })
            }
        }
    }

    if corners.len() != 4 {
        return Err(MosaicError::RoleCountMismatch {
            role: "corner",
            expected: 4,
            found: corners.len(),
        });
    }
    let expected = 4 * (mosaic_side - 2);
    if borders.len() != expected {
        return Err(MosaicError::RoleCountMismatch {
            role: "border",
            expected,
            found: borders.len(),
        });
    }
    let expected = (mosaic_side - 2) * (mosaic_side - 2);
    if interiors.len() != expected {
        return Err(MosaicError::RoleCountMismatch {
            role: "interior",
            expected,
            found: interiors.len(),
        });
    }

    Ok(Classification {
        mosaic_side,
        corners,
        borders,
        interiors,
    })
}
