/// Keyword → icon, checked in order; the first keyword found in the description wins.
const WEATHER_ICONS: &[(&str, &str)] = &[
    ("clear", "\u{2600}\u{fe0f}"),
    ("clouds", "\u{2601}\u{fe0f}"),
    ("rain", "\u{1f327}\u{fe0f}"),
    ("thunderstorm", "\u{26c8}\u{fe0f}"),
    ("snow", "\u{2744}\u{fe0f}"),
    ("mist", "\u{1f32b}\u{fe0f}"),
    ("fog", "\u{1f32b}\u{fe0f}"),
    ("haze", "\u{1f32b}\u{fe0f}"),
];

/// Shown when no keyword matches.
pub const DEFAULT_ICON: &str = "\u{1f308}";

/// Pick an icon for a free-text weather description.
pub fn classify(description: &str) -> &'static str {
    let lower = description.to_lowercase();

    WEATHER_ICONS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon_for(keyword: &str) -> &'static str {
        WEATHER_ICONS
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, icon)| *icon)
            .expect("keyword must be in the table")
    }

    #[test]
    fn every_keyword_maps_to_its_icon() {
        for (keyword, icon) in WEATHER_ICONS {
            assert_eq!(classify(keyword), *icon, "keyword {keyword}");
        }
    }

    #[test]
    fn matches_substrings_case_insensitively() {
        assert_eq!(classify("Clear sky"), icon_for("clear"));
        assert_eq!(classify("OVERCAST CLOUDS"), icon_for("clouds"));
        assert_eq!(classify("light rain"), icon_for("rain"));
        assert_eq!(classify("Heavy Snow"), icon_for("snow"));
        assert_eq!(classify("smoke and haze"), icon_for("haze"));
    }

    #[test]
    fn earlier_keyword_wins() {
        // "rain" precedes "thunderstorm" in the table.
        assert_eq!(classify("thunderstorm with light rain"), icon_for("rain"));
        assert_eq!(classify("thunderstorm"), icon_for("thunderstorm"));
    }

    #[test]
    fn unknown_description_gets_default() {
        assert_eq!(classify("tornado"), DEFAULT_ICON);
        assert_eq!(classify(""), DEFAULT_ICON);
    }
}
