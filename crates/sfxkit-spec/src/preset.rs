//! Built-in sound-effect presets.

use std::str::FromStr;

use crate::recipe::{Recipe, RecipeFile};
use crate::segment::Segment;

/// The six built-in sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Single 800 Hz beep.
    Beep,
    /// Two fading noise knocks.
    DoorKnock,
    /// Rising three-note chime.
    Success,
    /// Falling three-note chime.
    Fail,
    /// Two-note doorbell.
    Pinpon,
    /// Low two-part buzzer.
    Bubuu,
}

impl Preset {
    /// All presets in generation order.
    pub const ALL: [Preset; 6] = [
        Preset::Beep,
        Preset::DoorKnock,
        Preset::Success,
        Preset::Fail,
        Preset::Pinpon,
        Preset::Bubuu,
    ];

    /// Returns the preset name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Beep => "beep",
            Preset::DoorKnock => "door_knock",
            Preset::Success => "success",
            Preset::Fail => "fail",
            Preset::Pinpon => "pinpon",
            Preset::Bubuu => "bubuu",
        }
    }

    /// Short description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Preset::Beep => "simple 800 Hz beep",
            Preset::DoorKnock => "two short noise knocks",
            Preset::Success => "rising three-tone chime",
            Preset::Fail => "falling three-tone chime",
            Preset::Pinpon => "two-tone doorbell",
            Preset::Bubuu => "low two-part buzzer",
        }
    }

    /// Returns the fixed recipe for this preset at the default sample rate.
    pub fn recipe(&self) -> Recipe {
        let recipe = Recipe::new(self.as_str(), self.as_str());
        match self {
            Preset::Beep => recipe.segment(Segment::tone(800.0, 300, -5.0)),
            Preset::DoorKnock => recipe
                .segment(Segment::noise(50, -2.0).with_fade_out(30))
                .segment(Segment::silence(100))
                .segment(Segment::noise(50, -2.0).with_fade_out(30)),
            Preset::Success => recipe
                .segment(Segment::tone(600.0, 150, -5.0))
                .segment(Segment::tone(800.0, 150, -5.0))
                .segment(Segment::tone(1000.0, 200, -5.0)),
            Preset::Fail => recipe
                .segment(Segment::tone(600.0, 200, -5.0))
                .segment(Segment::tone(400.0, 150, -5.0))
                .segment(Segment::tone(200.0, 150, -5.0)),
            Preset::Pinpon => recipe
                .segment(Segment::tone(880.0, 200, -5.0))
                .segment(Segment::tone(660.0, 200, -5.0)),
            Preset::Bubuu => recipe
                .segment(Segment::tone(200.0, 200, -3.0))
                .segment(Segment::silence(80))
                .segment(Segment::tone(160.0, 300, -3.0)),
        }
    }

    /// Returns every preset recipe as a recipe file.
    pub fn catalog() -> RecipeFile {
        RecipeFile {
            recipes: Self::ALL.iter().map(Preset::recipe).collect(),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Preset::as_str).collect();
                format!("unknown preset '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preset_durations() {
        let durations: Vec<(Preset, u64)> = Preset::ALL
            .iter()
            .map(|p| (*p, p.recipe().duration_ms()))
            .collect();
        assert_eq!(
            durations,
            vec![
                (Preset::Beep, 300),
                (Preset::DoorKnock, 200),
                (Preset::Success, 500),
                (Preset::Fail, 500),
                (Preset::Pinpon, 400),
                (Preset::Bubuu, 580),
            ]
        );
    }

    #[test]
    fn test_catalog_is_valid() {
        let result = Preset::catalog().validate();
        assert!(result.is_ok(), "{:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_from_str_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.as_str().parse::<Preset>().unwrap(), preset);
        }
        let err = "buzz".parse::<Preset>().unwrap_err();
        assert!(err.contains("door_knock"));
    }

    #[test]
    fn test_door_knock_segments() {
        let recipe = Preset::DoorKnock.recipe();
        assert_eq!(recipe.file_stem, "door_knock");
        assert_eq!(recipe.segments.len(), 3);
        assert_eq!(recipe.segments[0].fade_out_ms(), Some(30));
        assert_eq!(recipe.segments[1], Segment::silence(100));
    }
}
