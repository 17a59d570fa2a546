use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// Label the endpoint sends when the customer did not win anything.
pub const CONSOLATION_LABEL: &str = "Better luck next time";

/// Glyph shown for the consolation label and for any label not in the catalogue.
pub const FALLBACK_GLYPH: &str = "🍀";

const PRIZE_GLYPHS: &[(&str, &str)] = &[
    ("Payasam mix", "🥣"),
    ("Glass or mug", "☕"),
    ("Snack box", "🍿"),
    ("Tiffin box", "🍱"),
    ("Jug", "🫖"),
    (CONSOLATION_LABEL, FALLBACK_GLYPH),
];

/// Looks up the glyph for a prize label, never failing.
pub fn glyph_for(label: &str) -> &'static str {
    PRIZE_GLYPHS
        .iter()
        .find(|(known, _)| *known == label)
        .map_or(FALLBACK_GLYPH, |&(_, glyph)| glyph)
}

/// A prize label together with the glyph shown under the cover.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrizeOutcome {
    label: String,
    glyph: String,
}

impl PrizeOutcome {
    pub fn new(label: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            glyph: glyph.into(),
        }
    }

    /// Resolves the glyph from the built-in catalogue.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let glyph = glyph_for(&label).to_string();
        Self { label, glyph }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn is_consolation(&self) -> bool {
        self.label == CONSOLATION_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve_to_their_glyph() {
        assert_eq!(glyph_for("Payasam mix"), "🥣");
        assert_eq!(glyph_for("Glass or mug"), "☕");
        assert_eq!(glyph_for("Tiffin box"), "🍱");
        assert_eq!(glyph_for("Jug"), "🫖");
    }

    #[test]
    fn unknown_label_uses_fallback_glyph() {
        assert_eq!(glyph_for("Gold bar"), FALLBACK_GLYPH);
        assert_eq!(glyph_for(""), FALLBACK_GLYPH);
        // Lookup is exact, not case-insensitive.
        assert_eq!(glyph_for("jug"), FALLBACK_GLYPH);

        let prize = PrizeOutcome::from_label("Gold bar");
        assert_eq!(prize.label(), "Gold bar");
        assert!(!prize.glyph().is_empty());
        assert!(!prize.is_consolation());
    }

    #[test]
    fn consolation_label_is_recognised() {
        let prize = PrizeOutcome::from_label(CONSOLATION_LABEL);
        assert!(prize.is_consolation());
        assert_eq!(prize.glyph(), FALLBACK_GLYPH);
    }
}
