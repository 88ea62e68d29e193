use crate::camera::DEFAULT_CAMERA_POSITION;
use bevy::math::Vec3;

/// Closed set of named camera views exposed to the UI and RPC layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Default,
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
    Closeup,
    Wide,
}

impl ViewKey {
    /// Convert string identifier to view key for RPC compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "front" => Some(Self::Front),
            "back" => Some(Self::Back),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "closeup" => Some(Self::Closeup),
            "wide" => Some(Self::Wide),
            _ => None,
        }
    }

    /// Convert view key to string identifier for frontend communication.
    pub fn to_string(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Front => "front",
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Closeup => "closeup",
            Self::Wide => "wide",
        }
    }
}

pub struct ViewPreset {
    pub key: ViewKey,
    pub position: Vec3,
    pub label: &'static str,
}

pub const VIEW_PRESETS: &[ViewPreset] = &[
    ViewPreset {
        key: ViewKey::Default,
        position: Vec3::new(0.0, -2.0, 15.0),
        label: "Default View",
    },
    ViewPreset {
        key: ViewKey::Front,
        position: Vec3::new(0.0, -2.0, 3.0),
        label: "Front View",
    },
    ViewPreset {
        key: ViewKey::Back,
        position: Vec3::new(0.0, -2.0, -3.0),
        label: "Back View",
    },
    ViewPreset {
        key: ViewKey::Left,
        position: Vec3::new(-3.0, -2.0, 0.0),
        label: "Left View",
    },
    ViewPreset {
        key: ViewKey::Right,
        position: Vec3::new(3.0, -2.0, 0.0),
        label: "Right View",
    },
    ViewPreset {
        key: ViewKey::Top,
        position: Vec3::new(0.0, 1.0, 0.0),
        label: "Top View",
    },
    ViewPreset {
        key: ViewKey::Bottom,
        position: Vec3::new(0.0, -5.0, 0.0),
        label: "Bottom View",
    },
    ViewPreset {
        key: ViewKey::Closeup,
        position: Vec3::new(1.0, -1.5, 1.0),
        label: "Close-up View",
    },
    ViewPreset {
        key: ViewKey::Wide,
        position: Vec3::new(5.0, 1.0, 60.0),
        label: "Wide View",
    },
];

pub fn view_preset(key: ViewKey) -> Option<&'static ViewPreset> {
    VIEW_PRESETS.iter().find(|preset| preset.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_mapping_round_trips() {
        for preset in VIEW_PRESETS {
            assert_eq!(
                ViewKey::from_string(preset.key.to_string()),
                Some(preset.key)
            );
        }
    }

    #[test]
    fn unknown_keys_do_not_resolve() {
        assert_eq!(ViewKey::from_string("overhead"), None);
        assert_eq!(ViewKey::from_string(""), None);
    }

    #[test]
    fn every_key_has_a_preset() {
        for preset in VIEW_PRESETS {
            assert!(view_preset(preset.key).is_some());
        }
    }

    #[test]
    fn default_preset_matches_the_resting_pose() {
        let preset = view_preset(ViewKey::Default).unwrap();
        assert_eq!(preset.position, DEFAULT_CAMERA_POSITION);
    }
}
