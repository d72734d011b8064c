use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named subdivision of a screen's visible frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    Left,
    Right,
    Up,
    Down,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Centre,
    LeftThird,
    CentreThird,
    RightThird,
    Left2Thirds,
    Right2Thirds,
    TopLeftSix,
    TopCentreSix,
    TopRightSix,
    BotLeftSix,
    BotCentreSix,
    BotRightSix,
    Maximized,
}

impl Region {
    pub const ALL: [Region; 21] = [
        Region::Left,
        Region::Right,
        Region::Up,
        Region::Down,
        Region::TopLeft,
        Region::TopRight,
        Region::BottomLeft,
        Region::BottomRight,
        Region::Centre,
        Region::LeftThird,
        Region::CentreThird,
        Region::RightThird,
        Region::Left2Thirds,
        Region::Right2Thirds,
        Region::TopLeftSix,
        Region::TopCentreSix,
        Region::TopRightSix,
        Region::BotLeftSix,
        Region::BotCentreSix,
        Region::BotRightSix,
        Region::Maximized,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Left => "left",
            Region::Right => "right",
            Region::Up => "up",
            Region::Down => "down",
            Region::TopLeft => "topLeft",
            Region::TopRight => "topRight",
            Region::BottomLeft => "bottomLeft",
            Region::BottomRight => "bottomRight",
            Region::Centre => "centre",
            Region::LeftThird => "leftThird",
            Region::CentreThird => "centreThird",
            Region::RightThird => "rightThird",
            Region::Left2Thirds => "left2Thirds",
            Region::Right2Thirds => "right2Thirds",
            Region::TopLeftSix => "topLeftSix",
            Region::TopCentreSix => "topCentreSix",
            Region::TopRightSix => "topRightSix",
            Region::BotLeftSix => "botLeftSix",
            Region::BotCentreSix => "botCentreSix",
            Region::BotRightSix => "botRightSix",
            Region::Maximized => "maximized",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown region: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for region in Region::ALL {
            assert_eq!(region.name().parse::<Region>(), Ok(region));
        }
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("TOPLEFT".parse::<Region>(), Ok(Region::TopLeft));
        assert!("middle".parse::<Region>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Region::Left2Thirds).unwrap();
        assert_eq!(json, "\"left2Thirds\"");

        let region: Region = serde_json::from_str("\"botRightSix\"").unwrap();
        assert_eq!(region, Region::BotRightSix);
    }

    #[test]
    fn test_british_spelling_only() {
        for name in ["left", "topRight", "centreThird", "topCentreSix"] {
            assert!(name.parse::<Region>().is_ok(), "{}", name);
        }
        assert!("centerThird".parse::<Region>().is_err());
        assert!("center".parse::<Region>().is_err());
    }
}
