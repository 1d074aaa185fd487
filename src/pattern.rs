use crate::assemble::Orientation;
use crate::tile::{Pixel, Pixels};
use anyhow::Result;
use once_cell::sync::Lazy;

/// Sparse pattern: the relative offsets of its "on" pixels plus the
/// bounding box they live in.
#[derive(Debug, Clone)]
pub struct Mask {
    offsets: Vec<(usize, usize)>,
    rows: usize,
    cols: usize,
}

impl Mask {
    /// Lines of `#` marks; any other character is an off cell. Trailing
    /// spaces widen the bounding box and are significant, so no trimming
    /// happens here.
    pub fn parse(s: &str) -> Result<Mask> {
        let rows = s.lines().count();
        let cols = s
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let mut offsets = Vec::new();
        for (r, line) in s.lines().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == '#' {
                    offsets.push((r, c));
                }
            }
        }
        if offsets.is_empty() {
            anyhow::bail!("Mask has no pixels set");
        }
        Ok(Mask {
            offsets,
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Count of "on" pixels.
    pub fn weight(&self) -> usize {
        self.offsets.len()
    }
}

// The trailing blanks on the first and last line are part of the pattern's
// bounding box; keep them.
const SEA_MONSTER_STR: &str = r"                  # 
#    ##    ##    ###
 #  #  #  #  #  #   ";

/// The creature to hunt for in assembled images.
pub fn sea_monster() -> &'static Mask {
    static INSTANCE: Lazy<Mask> =
        Lazy::new(|| Mask::parse(SEA_MONSTER_STR).expect("Invalid sea monster mask"));
    &INSTANCE
}

/// Every offset where all mask pixels land on "on" image pixels, the mask
/// bounding box kept fully inside the image.
pub fn find_occurrences(image: &Pixels, mask: &Mask) -> Vec<(usize, usize)> {
    let mut occurrences = Vec::new();
    if image.rows() < mask.rows() || image.cols() < mask.cols() {
        return occurrences;
    }
    for r in 0..=image.rows() - mask.rows() {
        for c in 0..=image.cols() - mask.cols() {
            let hit = mask
                .offsets()
                .iter()
                .all(|&(dr, dc)| image[(r + dr, c + dc)] == Pixel::Full);
            if hit {
                occurrences.push((r, c));
            }
        }
    }
    occurrences
}

/// Outcome of the eight-orientation hunt.
#[derive(Debug, Clone)]
pub struct PatternSearch {
    pub orientation: Orientation,
    /// The image transformed into the matching orientation.
    pub image: Pixels,
    pub occurrences: Vec<(usize, usize)>,
    /// How many of the eight orientations produced matches. More than one
    /// is an anomaly worth reporting; the last one wins here.
    pub matching_orientations: usize,
}

/// Try the mask against all eight symmetries of the image. `None` means the
/// pattern occurs nowhere, which is a legitimate outcome for the caller to
/// handle.
pub fn search_orientations(image: &Pixels, mask: &Mask) -> Option<PatternSearch> {
    let mut result: Option<PatternSearch> = None;
    let mut matching = 0;
    for &orientation in Orientation::ALL.iter() {
        let candidate = orientation.apply(image);
        let occurrences = find_occurrences(&candidate, mask);
        if !occurrences.is_empty() {
            matching += 1;
            result = Some(PatternSearch {
                orientation,
                image: candidate,
                occurrences,
                matching_orientations: 0,
            });
        }
    }
    result.map(|mut search| {
        search.matching_orientations = matching;
        search
    })
}

/// "On" pixels left over once every matched occurrence is blanked out.
/// Pixels shared by overlapping occurrences are subtracted once.
pub fn count_marks_excluding(
    image: &Pixels,
    occurrences: &[(usize, usize)],
    mask: &Mask,
) -> usize {
    let mut scratch = image.clone();
    for &(r, c) in occurrences {
        for &(dr, dc) in mask.offsets() {
            scratch[(r + dr, c + dc)] = Pixel::Empty;
        }
    }
    scratch
        .pos_iter()
        .filter(|&pos| scratch[pos] == Pixel::Full)
        .count()
}
