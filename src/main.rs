use anyhow::{Context, Result};
use itertools::Itertools;
use jigsaw::adjacency::Adjacency;
use jigsaw::classify::{classify, Classification};
use jigsaw::helpers;
use jigsaw::tile::{parse_tiles, Tile};
use jigsaw::{assemble, pattern, placement};

fn corner_id_product(classification: &Classification, tiles: &[Tile]) -> u64 {
    classification
        .corners
        .iter()
        .map(|&corner| tiles[corner].id as u64)
        .product()
}

fn main() -> Result<()> {
    let input = helpers::get_data_from_file_res("tiles").context("Couldn't read file contents.")?;
    let tiles = parse_tiles(&input)?;
    let adjacency = Adjacency::build(&tiles)?;
    let classification = classify(&adjacency)?;
    println!(
        "The product of the 4 corner tile ids is: {}",
        corner_id_product(&classification, &tiles)
    );

    let placement = placement::solve(&adjacency, &classification)?;
    let image = assemble::assemble(&placement, &tiles);
    let monster = pattern::sea_monster();
    match pattern::search_orientations(&image, monster) {
        None => println!("The pattern was not found in any orientation."),
        Some(search) => {
            if search.matching_orientations > 1 {
                println!(
                    "Warning: {} orientations contain the pattern, keeping the last one.",
                    search.matching_orientations
                );
            }
            let positions = search
                .occurrences
                .iter()
                .map(|(r, c)| format!("({}, {})", r, c))
                .join(", ");
            println!(
                "Found {} occurrence(s) of the pattern at: {}",
                search.occurrences.len(),
                positions
            );
            let marks = pattern::count_marks_excluding(&search.image, &search.occurrences, monster);
            println!("Marks outside the pattern: {}", marks);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jigsaw::assemble::Orientation;
    use jigsaw::helpers::synthetic;
    use jigsaw::tile::Pixel;

    #[test]
    fn test_solved_mosaics_reproduce_the_fingerprint() {
        for &(side, seed) in [(3usize, 41u64), (4, 42), (5, 43)].iter() {
            let content = synthetic::fingerprint(side, 10, seed);
            let mosaic = synthetic::scrambled(&content, 10, seed);
            let adjacency = Adjacency::build(&mosaic.tiles).unwrap();
            let classification = classify(&adjacency).unwrap();

            let expected: u64 = mosaic.corner_ids.iter().map(|&id| id as u64).product();
            assert_eq!(corner_id_product(&classification, &mosaic.tiles), expected);

            for &anchor in &classification.corners {
                let placement =
                    placement::solve_from(anchor, &adjacency, &classification).unwrap();
                let image = assemble::assemble(&placement, &mosaic.tiles);
                assert!(
                    Orientation::ALL
                        .iter()
                        .any(|o| o.apply(&mosaic.content) == image),
                    "assembled image is not a symmetry of the fingerprint"
                );
            }
        }
    }

    #[test]
    fn test_finds_single_embedded_sea_monster() {
        let monster = pattern::sea_monster();
        let mut content = synthetic::fingerprint(12, 12, 99);
        for &(dr, dc) in monster.offsets() {
            content[(40 + dr, 30 + dc)] = Pixel::Full;
        }
        let total_marks = content
            .pos_iter()
            .filter(|&pos| content[pos] == Pixel::Full)
            .count();

        let mosaic = synthetic::scrambled(&content, 12, 99);
        let adjacency = Adjacency::build(&mosaic.tiles).unwrap();
        let classification = classify(&adjacency).unwrap();
        let placement = placement::solve(&adjacency, &classification).unwrap();
        let image = assemble::assemble(&placement, &mosaic.tiles);

        let search = pattern::search_orientations(&image, monster).unwrap();
        assert_eq!(search.matching_orientations, 1);
        assert_eq!(search.occurrences.len(), 1);
        assert_eq!(
            pattern::count_marks_excluding(&search.image, &search.occurrences, monster),
            total_marks - monster.weight()
        );
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let run = || {
            let content = synthetic::fingerprint(4, 10, 77);
            let mosaic = synthetic::scrambled(&content, 10, 77);
            let adjacency = Adjacency::build(&mosaic.tiles).unwrap();
            let classification = classify(&adjacency).unwrap();
            let placement = placement::solve(&adjacency, &classification).unwrap();
            let image = assemble::assemble(&placement, &mosaic.tiles);
            (corner_id_product(&classification, &mosaic.tiles), image)
        };
        assert_eq!(run(), run());
    }
}
