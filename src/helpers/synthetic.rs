//! Deterministic scrambled-mosaic fixtures for tests and benches.

use crate::assemble::Orientation;
use crate::helpers::grid::Grid;
use crate::tile::{Pixel, Pixels, Tile, TileId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A scrambled tile set together with the ground truth it was cut from.
#[derive(Debug, Clone)]
pub struct SyntheticMosaic {
    pub tiles: Vec<Tile>,
    pub corner_ids: [TileId; 4],
    pub content: Pixels,
}

/// Sparse reference picture for a mosaic of the given dimensions, roughly
/// one pixel in eight set. This is the picture `scrambled` cuts into tiles
/// and the picture a correct solve must reproduce up to a whole-image
/// symmetry.
pub fn fingerprint(mosaic_side: usize, tile_side: usize, seed: u64) -> Pixels {
    let image_side = mosaic_side * (tile_side - 2);
    let mut rng = StdRng::seed_from_u64(seed);
    let g = (0..image_side * image_side)
        .map(|_| {
            if rng.gen_range(0..8) == 0 {
                Pixel::Full
            } else {
                Pixel::Empty
            }
        })
        .collect();
    Grid::new(image_side, image_side, g)
}

/// Cut `content` into bordered tiles, then hide the layout: every tile gets
/// a random orientation, the order is shuffled and the ids say nothing
/// about positions. Border sequences come from a pool of pairwise distinct,
/// reversal-distinct codes, so the only matches an adjacency build can find
/// are the intended seams.
pub fn scrambled(content: &Pixels, tile_side: usize, seed: u64) -> SyntheticMosaic {
    let inner = tile_side - 2;
    let mosaic_side = content.rows() / inner;
    assert_eq!(content.rows(), content.cols());
    assert_eq!(mosaic_side * inner, content.rows());

    let mut rng = StdRng::seed_from_u64(seed);
    let codes = edge_codes(tile_side, 2 * mosaic_side * (mosaic_side + 1));
    // Horizontal seam (r, c) sits above tile row r; vertical seam (r, c)
    // sits left of tile column c.
    let v_base = mosaic_side * (mosaic_side + 1);
    let h = |r: usize, c: usize| &codes[r * mosaic_side + c];
    let v = |r: usize, c: usize| &codes[v_base + r * (mosaic_side + 1) + c];

    let mut ids: Vec<TileId> = (0..(mosaic_side * mosaic_side) as TileId)
        .map(|i| 1000 + i)
        .collect();
    ids.shuffle(&mut rng);

    let mut tiles = Vec::with_capacity(mosaic_side * mosaic_side);
    for tr in 0..mosaic_side {
        for tc in 0..mosaic_side {
            let mut grid = Grid::new(
                tile_side,
                tile_side,
                vec![Pixel::Empty; tile_side * tile_side],
            );
            for r in 1..tile_side - 1 {
                for c in 1..tile_side - 1 {
                    grid[(r, c)] = content[(tr * inner + r - 1, tc * inner + c - 1)];
                }
            }
            for i in 0..tile_side {
                grid[(0, i)] = h(tr, tc)[i];
                grid[(tile_side - 1, i)] = h(tr + 1, tc)[i];
                grid[(i, 0)] = v(tr, tc)[i];
                grid[(i, tile_side - 1)] = v(tr, tc + 1)[i];
            }

            let orientation = Orientation {
                rotation: rng.gen_range(0..4),
                mirrored: rng.gen_bool(0.5),
            };
            tiles.push(Tile::new(
                ids[tr * mosaic_side + tc],
                orientation.apply(&grid),
            ));
        }
    }

    let last = mosaic_side - 1;
    let corner_ids = [
        ids[0],
        ids[last],
        ids[last * mosaic_side],
        ids[last * mosaic_side + last],
    ];

    tiles.shuffle(&mut rng);
    SyntheticMosaic {
        tiles,
        corner_ids,
        content: content.clone(),
    }
}

/// Pool of border sequences: all distinct, none a palindrome, none the
/// reversal of another. End pixels stay off so the four borders of a tile
/// agree in their shared corner cells.
fn edge_codes(tile_side: usize, count: usize) -> Vec<Vec<Pixel>> {
    let payload = tile_side - 2;
    let mut taken = std::collections::HashSet::new();
    let mut codes = Vec::with_capacity(count);
    for value in 0u64..(1 << payload) {
        let reversed = reverse_bits(value, payload);
        if value == reversed || taken.contains(&reversed) {
            continue;
        }
        taken.insert(value);

        let mut code = vec![Pixel::Empty; tile_side];
        for bit in 0..payload {
            if value >> bit & 1 == 1 {
                code[1 + bit] = Pixel::Full;
            }
        }
        codes.push(code);
        if codes.len() == count {
            return codes;
        }
    }
    panic!(
        "tile side {} is too small for {} distinct borders",
        tile_side, count
    );
}

fn reverse_bits(value: u64, width: usize) -> u64 {
    (0..width).fold(0, |acc, bit| acc << 1 | (value >> bit & 1))
}
