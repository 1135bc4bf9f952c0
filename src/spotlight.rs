//! Hover spotlight on project cards: the pointer position relative to the
//! card, exposed to CSS as `--x` / `--y`.

use glam::DVec2;

pub const CARD_SELECTOR: &str = ".project-card";

/// Pointer offset from the card's top-left corner.
pub fn spotlight(pointer: DVec2, card_origin: DVec2) -> DVec2 {
    pointer - card_origin
}

/// The custom properties to set for `offset`.
pub fn css_vars(offset: DVec2) -> [(&'static str, String); 2] {
    [
        ("--x", format!("{}px", offset.x)),
        ("--y", format!("{}px", offset.y)),
    ]
}
