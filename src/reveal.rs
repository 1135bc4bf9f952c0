//! Scroll-triggered reveal of page sections and skill bars.

/// Elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".project-card, .social-card, .skill, section h2";

/// Visible fraction at which an element counts as scrolled into view.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Class added up front; hides the element until it is shown.
pub const HIDDEN_CLASS: &str = "reveal";

/// Class added once the element has been seen. Never removed again.
pub const SHOWN_CLASS: &str = "show";

/// Class of skill entries whose progress bar fills on reveal.
pub const SKILL_CLASS: &str = "skill";

pub const PROGRESS_SELECTOR: &str = ".skill-progress";
pub const PROGRESS_ATTR: &str = "data-progress";

/// CSS width for a skill bar's `data-progress` percentage.
///
/// Values are clamped to `0..=100`; anything that is not a finite number
/// leaves the bar untouched.
pub fn progress_width(raw: &str) -> Option<String> {
    let percent: f64 = raw.trim().parse().ok()?;
    if !percent.is_finite() {
        return None;
    }
    Some(format!("{}%", percent.clamp(0.0, 100.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_becomes_percentage_width() {
        assert_eq!(progress_width("85").as_deref(), Some("85%"));
        assert_eq!(progress_width(" 42.5 ").as_deref(), Some("42.5%"));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_width("140").as_deref(), Some("100%"));
        assert_eq!(progress_width("-3").as_deref(), Some("0%"));
    }

    #[test]
    fn unparsable_progress_is_ignored() {
        assert_eq!(progress_width(""), None);
        assert_eq!(progress_width("lots"), None);
        assert_eq!(progress_width("NaN"), None);
        assert_eq!(progress_width("inf"), None);
    }

    #[test]
    fn selector_covers_headings_and_cards() {
        for part in [".project-card", ".social-card", ".skill", "section h2"] {
            assert!(REVEAL_SELECTOR.contains(part), "missing {part}");
        }
    }
}
