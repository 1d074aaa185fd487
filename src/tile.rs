use crate::helpers::grid::Grid;
use anyhow::Result;
use derive_more::Display;
use itertools::Itertools;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
pub enum Pixel {
    #[display(fmt = ".")]
    Empty,
    #[display(fmt = "#")]
    Full,
}

pub type TileId = u32;
pub type Pixels = Grid<Pixel>;

#[derive(Debug, Display, Clone)]
#[display(fmt = "Tile {}:\n{}", id, pixels)]
pub struct Tile {
    pub id: TileId,
    pub pixels: Pixels,
}

impl FromStr for Pixel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            None => anyhow::bail!("No pixel character"),
            Some('.') => Ok(Pixel::Empty),
            Some('#') => Ok(Pixel::Full),
            _ => anyhow::bail!("Invalid pixel"),
        }
    }
}

impl FromStr for Tile {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let id_line = s
            .lines()
            .next()
            .ok_or_else(|| anyhow::anyhow!("No tile header found"))?;
        let first_newline = s
            .find('\n')
            .ok_or_else(|| anyhow::anyhow!("No pixel rows found"))?;

        let id = id_line
            .split_whitespace()
            .nth(1)
            .ok_or_else(|| anyhow::anyhow!("No id in tile header"))?
            .trim_end_matches(':')
            .parse::<TileId>()
            .map_err(|_| anyhow::anyhow!("Non numeric tile id found"))?;
        let pixels = s[first_newline..].parse::<Pixels>()?;
        if pixels.rows() != pixels.cols() {
            anyhow::bail!(
                "Tile {} is {}x{}, expected a square",
                id,
                pixels.rows(),
                pixels.cols()
            );
        }

        Tile::new(id, pixels).ok()
    }
}

impl Tile {
    pub fn new(id: TileId, pixels: Pixels) -> Self {
        Tile { id, pixels }
    }

    fn ok(self) -> Result<Self> {
        Ok(self)
    }
}

/// Blank-line separated tile blocks, each a "Tile <id>:" header followed by
/// its pixel rows.
pub fn parse_tiles(s: &str) -> Result<Vec<Tile>> {
    s.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| block.parse::<Tile>())
        .try_collect()
}
