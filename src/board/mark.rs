use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// A player's mark. `X` moves first and plays for the highest outcome,
/// `O` for the lowest.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord)]
pub enum Mark {
    X = 0,
    O = 1,
}

impl Mark {
    const ALL: [Mark; 2] = [Mark::X, Mark::O];

    pub fn opponent(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn maximizes_score(&self) -> bool {
        match self {
            Mark::X => true,
            Mark::O => false,
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark_str = match self {
            Mark::X => "X",
            Mark::O => "O",
        };
        write!(f, "{}", mark_str)
    }
}

// used for letting external drivers pick a side
type ParseError = &'static str;
impl FromStr for Mark {
    type Err = ParseError;
    fn from_str(mark: &str) -> Result<Self, Self::Err> {
        match mark {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            "random" => Ok(Mark::random()),
            _ => Err("invalid mark; options are: x, o, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_maximizes_score() {
        assert!(Mark::X.maximizes_score());
        assert!(!Mark::O.maximizes_score());
    }

    #[test]
    fn test_random() {
        assert!(Mark::ALL.contains(&Mark::random()));
    }

    #[test]
    fn test_parse_x() {
        assert_eq!(Mark::X, Mark::from_str("x").unwrap());
        assert_eq!(Mark::X, Mark::from_str("X").unwrap());
    }

    #[test]
    fn test_parse_o() {
        assert_eq!(Mark::O, Mark::from_str("o").unwrap());
        assert_eq!(Mark::O, Mark::from_str("O").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_mark = Mark::from_str("random").unwrap();
        assert!(Mark::ALL.contains(&rand_mark));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Mark::from_str("z").is_err());
    }
}
