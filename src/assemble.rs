use crate::helpers::grid::Grid;
use crate::placement::Placement;
use crate::tile::{Pixel, Pixels, Tile};

/// One of the eight grid symmetries: counter-clockwise quarter turns
/// followed by an optional horizontal mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    pub rotation: u8,
    pub mirrored: bool,
}

impl Orientation {
    pub const ALL: [Orientation; 8] = [
        Orientation { rotation: 0, mirrored: false },
        Orientation { rotation: 0, mirrored: true },
        Orientation { rotation: 1, mirrored: false },
        Orientation { rotation: 1, mirrored: true },
        Orientation { rotation: 2, mirrored: false },
        Orientation { rotation: 2, mirrored: true },
        Orientation { rotation: 3, mirrored: false },
        Orientation { rotation: 3, mirrored: true },
    ];

    pub fn apply(&self, pixels: &Pixels) -> Pixels {
        let mut out = pixels.clone();
        for _ in 0..self.rotation {
            out = out.rotated_ccw();
        }
        if self.mirrored {
            out = out.mirrored();
        }
        out
    }
}

/// Interior of a tile with the 1-pixel border ring stripped off.
fn trimmed(pixels: &Pixels) -> Pixels {
    let rows = pixels.rows() - 2;
    let cols = pixels.cols() - 2;
    let mut g = Vec::with_capacity(rows * cols);
    for r in 1..pixels.rows() - 1 {
        for c in 1..pixels.cols() - 1 {
            g.push(pixels[(r, c)]);
        }
    }
    Grid::new(rows, cols, g)
}

/// Paste every placed tile, border stripped and orientation applied, into
/// one seamless picture.
pub fn assemble(placement: &Placement, tiles: &[Tile]) -> Pixels {
    let side = placement.side();
    let content = tiles[0].pixels.rows() - 2;
    let image_side = side * content;
    let mut image = Grid::new(
        image_side,
        image_side,
        vec![Pixel::Empty; image_side * image_side],
    );

    for row in 0..side {
        for col in 0..side {
            let placed = placement[(row, col)];
            let orientation = Orientation {
                rotation: placed.rotation,
                mirrored: placed.flipped,
            };
            let block = orientation.apply(&trimmed(&tiles[placed.tile].pixels));
            for r in 0..content {
                for c in 0..content {
                    image[(row * content + r, col * content + c)] = block[(r, c)];
                }
            }
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pixels(s: &str) -> Pixels {
        s.parse().unwrap()
    }

    #[test]
    fn test_orientations_are_distinct() {
        let asymmetric = pixels("##.\n...\n#..");
        let rendered: HashSet<String> = Orientation::ALL
            .iter()
            .map(|o| format!("{}", o.apply(&asymmetric)))
            .collect();
        assert_eq!(rendered.len(), 8);
    }

    #[test]
    fn test_orientation_identity() {
        let g = pixels("#.\n..");
        let identity = Orientation {
            rotation: 0,
            mirrored: false,
        };
        assert_eq!(identity.apply(&g), g);
    }

    #[test]
    fn test_orientation_rotates_then_mirrors() {
        let g = pixels("#.\n..");
        // One quarter turn puts the mark bottom-left, the mirror then sends
        // it bottom-right.
        let o = Orientation {
            rotation: 1,
            mirrored: true,
        };
        assert_eq!(o.apply(&g), pixels("..\n.#"));
    }

    #[test]
    fn test_trimmed_strips_border_ring() {
        let g = pixels("####\n#.##\n####\n####");
        assert_eq!(trimmed(&g), pixels(".#\n##"));
    }
}
