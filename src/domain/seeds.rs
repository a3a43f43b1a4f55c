use std::str::FromStr;

use rand::Rng;

use super::cell::Cell;
use super::error::LifeError;
use super::grid::Generation;

// Pattern art: '#' is alive, anything else is dead. The dimensions are
// intrinsic to each pattern and the parsed generation is exactly as wide
// and tall as the art below.

/// Period-2 oscillator, 5x5.
const BLINKER: [&str; 5] = [
    ".....", //
    "..#..",
    "..#..",
    "..#..",
    ".....",
];

/// Period-2 oscillator, 6x6.
const TOAD: [&str; 6] = [
    "......", //
    "......",
    "..###.",
    ".###..",
    "......",
    "......",
];

/// Period-3 oscillator, 15x15.
const STAR: [&str; 15] = [
    "...............",
    "...............",
    ".......#.......",
    "......###......",
    "....###.###....",
    "....#.....#....",
    "...##.....##...",
    "..##.......##..",
    "...##.....##...",
    "....#.....#....",
    "....###.###....",
    "......###......",
    ".......#.......",
    "...............",
    "...............",
];

/// The well-known starting patterns the catalog knows by name.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SeedName {
    Blinker,
    Toad,
    Star,
}

impl SeedName {
    /// The literal starting pattern, at its intrinsic dimensions.
    pub fn pattern(self) -> Generation {
        match self {
            SeedName::Blinker => parse_art(&BLINKER),
            SeedName::Toad => parse_art(&TOAD),
            SeedName::Star => parse_art(&STAR),
        }
    }
}

impl FromStr for SeedName {
    type Err = LifeError;

    /// Case-insensitive lookup. Unrecognized names are an explicit error,
    /// never a silent fallback to some other seed.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "blinker" => Ok(SeedName::Blinker),
            "toad" => Ok(SeedName::Toad),
            "star" => Ok(SeedName::Star),
            _ => Err(LifeError::UnknownSeedName(name.to_string())),
        }
    }
}

/// How a caller asks for an initial generation.
#[derive(Clone, Debug)]
pub enum Seed {
    /// A catalog pattern, at the pattern's own dimensions.
    Named(SeedName),
    /// A generation the caller built directly.
    Explicit(Generation),
    /// A uniform random fill of the given dimensions.
    Random { rows: usize, cols: usize },
}

impl Seed {
    /// Produce the starting generation. The random source is injected so
    /// callers who need reproducible runs can pass a seeded RNG.
    pub fn realize(self, rng: &mut impl Rng) -> Generation {
        match self {
            Seed::Named(name) => name.pattern(),
            Seed::Explicit(generation) => generation,
            Seed::Random { rows, cols } => random(rows, cols, rng),
        }
    }
}

/// A `rows x cols` generation where each cell is independently alive with
/// probability one half.
pub fn random(rows: usize, cols: usize, rng: &mut impl Rng) -> Generation {
    (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.random_bool(0.5) {
                        Cell::Alive
                    } else {
                        Cell::Dead
                    }
                })
                .collect()
        })
        .collect()
}

fn parse_art(art: &[&str]) -> Generation {
    art.iter()
        .map(|line| {
            line.chars()
                .map(|ch| if ch == '#' { Cell::Alive } else { Cell::Dead })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn shape(generation: &Generation) -> (usize, usize) {
        (generation.len(), generation.first().map_or(0, Vec::len))
    }

    #[test]
    fn named_patterns_have_documented_dimensions() {
        assert_eq!(shape(&SeedName::Blinker.pattern()), (5, 5));
        assert_eq!(shape(&SeedName::Toad.pattern()), (6, 6));
        assert_eq!(shape(&SeedName::Star.pattern()), (15, 15));
    }

    #[test]
    fn patterns_are_rectangular() {
        for name in [SeedName::Blinker, SeedName::Toad, SeedName::Star] {
            let pattern = name.pattern();
            let cols = pattern[0].len();
            assert!(pattern.iter().all(|row| row.len() == cols));
        }
    }

    #[test]
    fn blinker_is_a_vertical_column_of_three() {
        let pattern = SeedName::Blinker.pattern();
        let live: Vec<_> = (0..5)
            .flat_map(|r| (0..5).map(move |c| (r, c)))
            .filter(|&(r, c)| pattern[r][c].is_alive())
            .collect();
        assert_eq!(live, vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn seed_names_parse_case_insensitively() {
        assert_eq!("blinker".parse::<SeedName>().unwrap(), SeedName::Blinker);
        assert_eq!("Toad".parse::<SeedName>().unwrap(), SeedName::Toad);
        assert_eq!("STAR".parse::<SeedName>().unwrap(), SeedName::Star);
    }

    #[test]
    fn unknown_seed_name_is_an_error_not_a_fallback() {
        let err = "blinkr".parse::<SeedName>().unwrap_err();
        assert_eq!(err, LifeError::UnknownSeedName("blinkr".to_string()));
    }

    #[test]
    fn random_fill_has_requested_dimensions() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(shape(&random(12, 34, &mut rng)), (12, 34));
    }

    #[test]
    fn random_fill_is_reproducible_with_a_seeded_rng() {
        let mut first = SmallRng::seed_from_u64(42);
        let mut second = SmallRng::seed_from_u64(42);
        assert_eq!(random(10, 10, &mut first), random(10, 10, &mut second));
    }

    #[test]
    fn realize_dispatches_each_variant() {
        let mut rng = SmallRng::seed_from_u64(1);

        let named = Seed::Named(SeedName::Toad).realize(&mut rng);
        assert_eq!(named, SeedName::Toad.pattern());

        let explicit = vec![vec![Cell::Alive]];
        assert_eq!(
            Seed::Explicit(explicit.clone()).realize(&mut rng),
            explicit
        );

        let randomized = Seed::Random { rows: 3, cols: 9 }.realize(&mut rng);
        assert_eq!(shape(&randomized), (3, 9));
    }
}
