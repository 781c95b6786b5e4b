use std::fmt;
use std::str::FromStr;

use crate::models::errors::ConfigError;

/// Styling revisions of the root wrapper; only the container classes differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WrapperPreset {
    #[default]
    A,
    B,
}

impl WrapperPreset {
    pub fn container_class(self) -> &'static str {
        match self {
            WrapperPreset::A => "bg-black h-screen pt-28",
            WrapperPreset::B => "bg-gray-900 h-screen pt-16",
        }
    }
}

impl FromStr for WrapperPreset {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(WrapperPreset::A),
            "B" => Ok(WrapperPreset::B),
            _ => Err(ConfigError::InvalidPreset(value.to_string())),
        }
    }
}

impl fmt::Display for WrapperPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapperPreset::A => f.write_str("A"),
            WrapperPreset::B => f.write_str("B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A", WrapperPreset::A)]
    #[case("a", WrapperPreset::A)]
    #[case(" b ", WrapperPreset::B)]
    fn parses_presets(#[case] raw: &str, #[case] expected: WrapperPreset) {
        assert_eq!(raw.parse::<WrapperPreset>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_preset() {
        let err = "C".parse::<WrapperPreset>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPreset(ref raw) if raw == "C"));
    }

    #[test]
    fn presets_differ_in_background_and_padding() {
        assert_eq!(WrapperPreset::default().container_class(), "bg-black h-screen pt-28");
        assert_ne!(
            WrapperPreset::A.container_class(),
            WrapperPreset::B.container_class()
        );
    }
}
