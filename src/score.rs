//! The `Score` domain type: an exact decimal in [0, 10] with at most two
//! fractional digits.
//!
//! Validation runs against the caller's original decimal text, never a
//! parsed float. A float round-trip would let values like `7.005` slip
//! through as "two decimals" depending on representation; parsing the text
//! keeps the precision check exact. Internally the score is held in
//! centi-units (hundredths), so formatting cannot reintroduce artifacts.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Upper bound of the score domain, in centi-units (10.00).
const MAX_CENTI: u32 = 1_000;

/// A validated accessibility score.
///
/// Construct via [`str::parse`]; a `Score` that exists is always in range
/// and has at most two decimal digits.
///
/// # Examples
///
/// ```
/// use sealgen::Score;
///
/// let score: Score = "7.5".parse().unwrap();
/// assert_eq!(score.formatted(), "7,50");
/// assert!("7.005".parse::<Score>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    centi: u32,
}

impl Score {
    /// The score in centi-units (0..=1000).
    pub fn centi(&self) -> u32 {
        self.centi
    }

    /// Fixed two-decimal rendering with a comma separator, as stamped on
    /// the seal: `7.5` becomes `"7,50"`, `10` becomes `"10,00"`.
    pub fn formatted(&self) -> String {
        format!("{},{:02}", self.centi / 100, self.centi % 100)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

fn all_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Score {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || Error::InvalidScore(format!("'{raw}' is not a valid decimal score"));

        // A leading sign is only plausible on a negative value; report it
        // as a range violation rather than a syntax one.
        if let Some(rest) = raw.strip_prefix('-') {
            if all_ascii_digits(rest.replace('.', "").as_str()) && !rest.is_empty() {
                return Err(Error::InvalidScore(
                    "score must be between 0 and 10".into(),
                ));
            }
            return Err(invalid());
        }

        let (int_part, frac_part) = match raw.split_once('.') {
            Some((i, f)) => (i, f),
            None => (raw, ""),
        };

        if !all_ascii_digits(int_part) {
            return Err(invalid());
        }
        if !frac_part.is_empty() && !all_ascii_digits(frac_part) {
            return Err(invalid());
        }

        // Precision is judged on the text as written: "7.500" has three
        // fractional digits even though its value fits in two.
        if frac_part.len() > 2 {
            return Err(Error::InvalidScore(
                "score must have at most two decimal places".into(),
            ));
        }

        let whole: u32 = int_part.parse().map_err(|_| invalid())?;
        let mut frac: u32 = 0;
        if !frac_part.is_empty() {
            frac = frac_part.parse().map_err(|_| invalid())?;
            if frac_part.len() == 1 {
                frac *= 10;
            }
        }

        let centi = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(invalid)?;

        if centi > MAX_CENTI {
            return Err(Error::InvalidScore(
                "score must be between 0 and 10".into(),
            ));
        }

        Ok(Score { centi })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Score> {
        s.parse()
    }

    #[test]
    fn accepts_whole_and_fractional_scores() {
        assert_eq!(parse("0").unwrap().centi(), 0);
        assert_eq!(parse("7.5").unwrap().centi(), 750);
        assert_eq!(parse("7.50").unwrap().centi(), 750);
        assert_eq!(parse("10").unwrap().centi(), 1000);
        assert_eq!(parse("10.00").unwrap().centi(), 1000);
        assert_eq!(parse("9.99").unwrap().centi(), 999);
    }

    #[test]
    fn formats_with_comma_separator() {
        assert_eq!(parse("7.5").unwrap().formatted(), "7,50");
        assert_eq!(parse("10").unwrap().formatted(), "10,00");
        assert_eq!(parse("0").unwrap().formatted(), "0,00");
        assert_eq!(parse("3.07").unwrap().formatted(), "3,07");
    }

    #[test]
    fn rejects_out_of_range() {
        for raw in ["-1", "-0.5", "10.01", "15", "100"] {
            match parse(raw) {
                Err(Error::InvalidScore(msg)) => {
                    assert!(msg.contains("between 0 and 10"), "{raw}: {msg}")
                }
                other => panic!("{raw}: expected range error, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_excess_precision_on_the_original_text() {
        for raw in ["7.005", "3.333", "7.777", "7.500"] {
            match parse(raw) {
                Err(Error::InvalidScore(msg)) => {
                    assert!(msg.contains("decimal places"), "{raw}: {msg}")
                }
                other => panic!("{raw}: expected precision error, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_non_numeric_input() {
        for raw in ["", "abc", "7,5", "1e1", "7.5.0", ".", "+7"] {
            assert!(parse(raw).is_err(), "{raw} should not parse");
        }
    }
}
