use serde::Serialize;

use crate::profile::PROFILE_LEN;

/// Raw encoding of [`Alignment::NoMatch`] in the published cell
pub const NO_MATCH: i32 = -1;

/// Result of one matching cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Rotation, in degrees `[0, 360)`, at which the profiles coincide
    Offset(u16),
    /// The profiles share no exact alignment
    #[default]
    NoMatch,
}

impl Alignment {
    /// Build from a search position. Positions outside one turn are not
    /// valid offsets.
    pub fn from_position(position: Option<usize>) -> Self {
        match position {
            Some(p) if p < PROFILE_LEN => Alignment::Offset(p as u16),
            _ => Alignment::NoMatch,
        }
    }

    pub fn offset(self) -> Option<u16> {
        match self {
            Alignment::Offset(deg) => Some(deg),
            Alignment::NoMatch => None,
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, Alignment::Offset(_))
    }

    /// Offset folded into `(-180, 180]`, the shortest correction.
    pub fn signed_degrees(self) -> Option<i16> {
        self.offset().map(|deg| {
            let deg = deg as i16;
            if deg > 180 { deg - PROFILE_LEN as i16 } else { deg }
        })
    }

    /// Encoding stored in the published cell; `NO_MATCH` for no match.
    ///
    /// An offset outside one turn is a caller bug; debug builds panic on it,
    /// release builds encode it as no match.
    pub fn to_raw(self) -> i32 {
        match self {
            Alignment::Offset(deg) => {
                debug_assert!(
                    usize::from(deg) < PROFILE_LEN,
                    "offset {} outside one turn",
                    deg
                );
                if usize::from(deg) < PROFILE_LEN {
                    i32::from(deg)
                } else {
                    NO_MATCH
                }
            }
            Alignment::NoMatch => NO_MATCH,
        }
    }

    pub fn from_raw(raw: i32) -> Self {
        if (0..PROFILE_LEN as i32).contains(&raw) {
            Alignment::Offset(raw as u16)
        } else {
            Alignment::NoMatch
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alignment::Offset(deg) => write!(f, "{} deg", deg),
            Alignment::NoMatch => write!(f, "no match"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_encoding() {
        assert_eq!(Alignment::Offset(0).to_raw(), 0);
        assert_eq!(Alignment::Offset(359).to_raw(), 359);
        assert_eq!(Alignment::NoMatch.to_raw(), NO_MATCH);

        assert_eq!(Alignment::from_raw(42), Alignment::Offset(42));
        assert_eq!(Alignment::from_raw(NO_MATCH), Alignment::NoMatch);
        assert_eq!(Alignment::from_raw(360), Alignment::NoMatch);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside one turn")]
    fn test_out_of_turn_offset_panics_in_debug() {
        Alignment::Offset(400).to_raw();
    }

    #[test]
    fn test_from_position() {
        assert_eq!(Alignment::from_position(Some(12)), Alignment::Offset(12));
        assert_eq!(Alignment::from_position(Some(360)), Alignment::NoMatch);
        assert_eq!(Alignment::from_position(None), Alignment::NoMatch);
    }

    #[test]
    fn test_signed_degrees() {
        assert_eq!(Alignment::Offset(0).signed_degrees(), Some(0));
        assert_eq!(Alignment::Offset(90).signed_degrees(), Some(90));
        assert_eq!(Alignment::Offset(180).signed_degrees(), Some(180));
        assert_eq!(Alignment::Offset(181).signed_degrees(), Some(-179));
        assert_eq!(Alignment::Offset(359).signed_degrees(), Some(-1));
        assert_eq!(Alignment::NoMatch.signed_degrees(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Alignment::Offset(15).to_string(), "15 deg");
        assert_eq!(Alignment::NoMatch.to_string(), "no match");
    }
}
