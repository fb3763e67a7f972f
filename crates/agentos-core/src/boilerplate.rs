/// Placeholder text seeded by the project template. A document that still
/// contains any of these has not been written by the team yet.
pub const MARKERS: &[&str] = &[
    "[Your Product Name]",
    "[Database choice]",
    "[Role]",
    "[Feature 1]",
    "[Target Audience]",
    "[Unique Value Proposition",
    "MVP Launch",
    "First User",
    "Feature A",
];

/// Plain substring containment against [`MARKERS`]. Case-sensitive.
pub fn is_boilerplate(content: &str) -> bool {
    MARKERS.iter().any(|marker| content.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_prose_is_not_boilerplate() {
        assert!(!is_boilerplate("# Mission\nBuild a great app."));
        assert!(!is_boilerplate(""));
    }

    #[test]
    fn every_marker_is_detected() {
        for marker in MARKERS {
            let content = format!("# Doc\n\nSome text {marker} more text\n");
            assert!(is_boilerplate(&content), "marker not detected: {marker}");
        }
    }

    #[test]
    fn template_mission_is_boilerplate() {
        let content = "# Product Mission\n\n## Pitch\n[Your Product Name] helps [Target Audience] ...";
        assert!(is_boilerplate(content));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(!is_boilerplate("our mvp launch is in May"));
        assert!(is_boilerplate("Our MVP Launch is in May"));
    }
}
