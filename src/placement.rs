use crate::adjacency::{Adjacency, Side, TileIndex};
use crate::classify::Classification;
use crate::error::MosaicError;

/// One resolved cell: the tile that lands there, turned `rotation` quarter
/// turns counter-clockwise and then mirrored horizontally if `flipped`.
///
/// `rotation` doubles as the orientation key: `Side::ALL[rotation]` is the
/// physical side that ends up facing right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub tile: TileIndex,
    pub rotation: u8,
    pub flipped: bool,
}

impl Placed {
    /// Physical side currently facing right. The mirror swaps left and
    /// right, hence the half-turn correction.
    fn facing_right(&self) -> Side {
        let shift = if self.flipped { 2 } else { 0 };
        Side::from_index(self.rotation as usize + shift)
    }

    /// Physical side currently facing down; the mirror leaves it in place.
    fn facing_down(&self) -> Side {
        Side::from_index(self.rotation as usize + 1)
    }
}

/// Completed row-major grid of placements, one tile per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    side: usize,
    cells: Vec<Placed>,
}

impl Placement {
    pub fn side(&self) -> usize {
        self.side
    }
}

impl std::ops::Index<(usize, usize)> for Placement {
    type Output = Placed;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[self.side * index.0 + index.1]
    }
}

/// Solve starting from the first classified corner; the anchor choice is
/// arbitrary for a valid tile set.
pub fn solve(
    adjacency: &Adjacency,
    classification: &Classification,
) -> Result<Placement, MosaicError> {
    solve_from(classification.corners[0], adjacency, classification)
}

/// Deduce the whole grid of placements with `anchor` pinned to the top-left
/// cell. Every step follows the single adjacency link the already placed
/// neighbours dictate, so the walk never backtracks; zero or several
/// candidates at any step is fatal.
pub fn solve_from(
    anchor: TileIndex,
    adjacency: &Adjacency,
    classification: &Classification,
) -> Result<Placement, MosaicError> {
    let side = classification.mosaic_side;
    let mut rows: Vec<Vec<Placed>> = Vec::with_capacity(side);
    rows.push(first_row(anchor, adjacency, side)?);
    for _ in 1..side {
        let row = next_row(rows.last().unwrap(), adjacency)?;
        rows.push(row);
    }

    let mut seen = vec![false; adjacency.tile_count()];
    for placed in rows.iter().flatten() {
        if seen[placed.tile] {
            return Err(MosaicError::DuplicatePlacement {
                id: adjacency.id(placed.tile),
            });
        }
        seen[placed.tile] = true;
    }

    Ok(Placement {
        side,
        cells: rows.into_iter().flatten().collect(),
    })
}

fn first_row(
    anchor: TileIndex,
    adjacency: &Adjacency,
    side: usize,
) -> Result<Vec<Placed>, MosaicError> {
    let mut row = vec![anchor_orientation(anchor, adjacency)?];
    for _ in 1..side - 1 {
        let previous = *row.last().unwrap();
        let (tile, entry) = adjacency.follow(previous.tile, previous.facing_right())?;
        row.push(top_border_orientation(tile, entry, adjacency)?);
    }
    let previous = *row.last().unwrap();
    let (tile, entry) = adjacency.follow(previous.tile, previous.facing_right())?;
    row.push(top_right_corner_orientation(tile, entry, adjacency)?);
    Ok(row)
}

/// The anchor corner goes top-left, so its two boundary sides must come to
/// face left and up. A plain rotation always suffices; the global mirror
/// freedom is spent here by fixing `flipped` to false.
fn anchor_orientation(anchor: TileIndex, adjacency: &Adjacency) -> Result<Placed, MosaicError> {
    let outer = adjacency.outer_sides(anchor)?;
    if outer.len() != 2 {
        return Err(MosaicError::OuterSideMismatch {
            id: adjacency.id(anchor),
            count: outer.len(),
            expected: 2,
        });
    }
    // `outer` keeps the Side::ALL order, so each adjacent pair shows up in
    // exactly one arrangement.
    let rotation = match (outer[0], outer[1]) {
        (Side::Left, Side::Up) => 0,
        (Side::Right, Side::Up) => 1,
        (Side::Right, Side::Down) => 2,
        (Side::Down, Side::Left) => 3,
        _ => {
            return Err(MosaicError::UnresolvableOrientation {
                id: adjacency.id(anchor),
            })
        }
    };
    Ok(Placed {
        tile: anchor,
        rotation,
        flipped: false,
    })
}

/// A top-row border tile: its single boundary side faces up, and `entry`,
/// the side matched to the previous tile, faces left.
fn top_border_orientation(
    tile: TileIndex,
    entry: Side,
    adjacency: &Adjacency,
) -> Result<Placed, MosaicError> {
    let outer = adjacency.outer_sides(tile)?;
    if outer.len() != 1 {
        return Err(MosaicError::OuterSideMismatch {
            id: adjacency.id(tile),
            count: outer.len(),
            expected: 1,
        });
    }
    let rotation = (outer[0].index() + 1) % 4;
    let flipped = if entry == Side::from_index(rotation) {
        true
    } else if entry == Side::from_index(rotation + 2) {
        false
    } else {
        return Err(MosaicError::UnresolvableOrientation {
            id: adjacency.id(tile),
        });
    };
    Ok(Placed {
        tile,
        rotation: rotation as u8,
        flipped,
    })
}

/// The corner closing the first row: `entry` faces left and the corner's
/// other matched side must come to face down.
fn top_right_corner_orientation(
    tile: TileIndex,
    entry: Side,
    adjacency: &Adjacency,
) -> Result<Placed, MosaicError> {
    let id = adjacency.id(tile);
    let outer = adjacency.outer_sides(tile)?;
    if outer.len() != 2 {
        return Err(MosaicError::OuterSideMismatch {
            id,
            count: outer.len(),
            expected: 2,
        });
    }
    if outer.contains(&entry) {
        return Err(MosaicError::UnresolvableOrientation { id });
    }
    let other = match Side::ALL
        .iter()
        .find(|&&side| !outer.contains(&side) && side != entry)
    {
        Some(&other) => other,
        None => return Err(MosaicError::UnresolvableOrientation { id }),
    };

    if other.index() == (entry.index() + 3) % 4 {
        // The other matched side precedes `entry` in the ring: a plain
        // rotation lands entry left and the other side down.
        Ok(Placed {
            tile,
            rotation: ((entry.index() + 2) % 4) as u8,
            flipped: false,
        })
    } else if other.index() == (entry.index() + 1) % 4 {
        Ok(Placed {
            tile,
            rotation: entry.index() as u8,
            flipped: true,
        })
    } else {
        Err(MosaicError::UnresolvableOrientation { id })
    }
}

fn next_row(previous_row: &[Placed], adjacency: &Adjacency) -> Result<Vec<Placed>, MosaicError> {
    // The leftmost cell hangs off the tile above alone; its left side must
    // land on the boundary, which decides the mirror.
    let above = previous_row[0];
    let (tile, entry) = adjacency.follow(above.tile, above.facing_down())?;
    let rotation = (entry.index() + 1) % 4;
    let outer = adjacency.outer_sides(tile)?;
    let flipped = !outer.contains(&Side::from_index(rotation + 2));
    let mut row = vec![Placed {
        tile,
        rotation: rotation as u8,
        flipped,
    }];

    for i in 1..previous_row.len() {
        let previous = *row.last().unwrap();
        let (from_left, entry_left) = adjacency.follow(previous.tile, previous.facing_right())?;
        let above = previous_row[i];
        let (from_above, entry_above) = adjacency.follow(above.tile, above.facing_down())?;
        if from_left != from_above {
            return Err(MosaicError::NeighbourDisagreement {
                left_id: adjacency.id(from_left),
                above_id: adjacency.id(from_above),
            });
        }

        let rotation = (entry_above.index() + 1) % 4;
        // With entry_above facing up, entry_left has to face left: either a
        // half turn away in the ring, or facing right and mirrored over.
        let flipped = match (rotation + 4 - entry_left.index()) % 4 {
            0 => true,
            2 => false,
            _ => {
                return Err(MosaicError::UnresolvableOrientation {
                    id: adjacency.id(from_left),
                })
            }
        };
        row.push(Placed {
            tile: from_left,
            rotation: rotation as u8,
            flipped,
        });
    }
    Ok(row)
}
