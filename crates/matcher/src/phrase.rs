use regex::Regex;

/// A successfully matched acknowledgment phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    /// Full name as declared in the message, trimmed.
    pub declared_full_name: String,
    /// Handbook version the message acknowledged (always the pinned one).
    pub handbook_version: String,
}

/// Matches the fixed acknowledgment template against message text.
///
/// The surrounding literal text must match exactly; only the declared name
/// varies. The handbook version is pinned at construction, so a message
/// acknowledging any other version does not match.
#[derive(Debug, Clone)]
pub struct AckMatcher {
    pattern: Regex,
    handbook_version: String,
}

impl AckMatcher {
    /// Build a matcher pinned to `handbook_version`, e.g. `"2026-01-20"`.
    pub fn new(handbook_version: &str) -> crate::Result<Self> {
        // Name capture accepts letters (any script), spaces, periods,
        // hyphens and apostrophes, and must start with a letter so the
        // capture can never be all whitespace.
        let pattern = Regex::new(&format!(
            r"^I, (\p{{L}}[\p{{L}} .'\-]*), acknowledge and agree to the HHG Employee Handbook v{}$",
            regex::escape(handbook_version),
        ))?;
        Ok(Self {
            pattern,
            handbook_version: handbook_version.to_string(),
        })
    }

    /// Test `text` against the template.
    ///
    /// Returns `None` unless the whole message, modulo leading and trailing
    /// whitespace, is the template with the pinned version.
    pub fn match_text(&self, text: &str) -> Option<Acknowledgment> {
        let caps = self.pattern.captures(text.trim())?;
        let name = caps.get(1)?.as_str().trim();
        if name.is_empty() {
            return None;
        }
        Some(Acknowledgment {
            declared_full_name: name.to_string(),
            handbook_version: self.handbook_version.clone(),
        })
    }

    /// The handbook version this matcher accepts.
    pub fn handbook_version(&self) -> &str {
        &self.handbook_version
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    fn matcher() -> AckMatcher {
        AckMatcher::new("2026-01-20").unwrap()
    }

    #[test]
    fn matches_spec_example() {
        let ack = matcher()
            .match_text("I, Jane A. Doe, acknowledge and agree to the HHG Employee Handbook v2026-01-20")
            .unwrap();
        assert_eq!(ack.declared_full_name, "Jane A. Doe");
        assert_eq!(ack.handbook_version, "2026-01-20");
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let ack = matcher()
            .match_text("  I, Jane Doe, acknowledge and agree to the HHG Employee Handbook v2026-01-20\n")
            .unwrap();
        assert_eq!(ack.declared_full_name, "Jane Doe");
    }

    #[rstest]
    #[case("O'Brien")]
    #[case("Anne-Marie Smith")]
    #[case("J. R. R. Tolkien")]
    #[case("José García")]
    #[case("Renée O'Brien")]
    #[case("Søren Kierkegaard")]
    fn accepts_ordinary_name_characters(#[case] name: &str) {
        let text = format!(
            "I, {name}, acknowledge and agree to the HHG Employee Handbook v2026-01-20"
        );
        let ack = matcher().match_text(&text).unwrap();
        assert_eq!(ack.declared_full_name, name);
    }

    #[rstest]
    // Missing version suffix.
    #[case("I, Jane Doe, acknowledge and agree to the HHG Employee Handbook")]
    // Wrong version.
    #[case("I, Jane Doe, acknowledge and agree to the HHG Employee Handbook v2025-06-01")]
    // Extra text around the template.
    #[case("Hi! I, Jane Doe, acknowledge and agree to the HHG Employee Handbook v2026-01-20")]
    #[case("I, Jane Doe, acknowledge and agree to the HHG Employee Handbook v2026-01-20 thanks")]
    // Empty name.
    #[case("I, , acknowledge and agree to the HHG Employee Handbook v2026-01-20")]
    // Case differences in the literal text.
    #[case("i, Jane Doe, Acknowledge and agree to the HHG Employee Handbook v2026-01-20")]
    // Unrelated chatter.
    #[case("what's for lunch?")]
    #[case("")]
    fn rejects_non_matching_text(#[case] text: &str) {
        assert_eq!(matcher().match_text(text), None);
    }

    #[test]
    fn name_roundtrips_modulo_whitespace() {
        // Trailing space inside the capture is trimmed away.
        let ack = matcher()
            .match_text("I, Jane Doe , acknowledge and agree to the HHG Employee Handbook v2026-01-20")
            .unwrap();
        assert_eq!(ack.declared_full_name, "Jane Doe");
    }

    #[test]
    fn version_with_regex_metacharacters_is_escaped() {
        let m = AckMatcher::new("2026.01").unwrap();
        assert!(
            m.match_text("I, Jane Doe, acknowledge and agree to the HHG Employee Handbook v2026.01")
                .is_some()
        );
        // A literal dot must not act as a wildcard.
        assert!(
            m.match_text("I, Jane Doe, acknowledge and agree to the HHG Employee Handbook v2026x01")
                .is_none()
        );
    }
}
