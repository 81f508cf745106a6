mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use dioxus::prelude::*;

use portfolio_core::progress::{TransitRange, section_progress};
use portfolio_core::section::SectionId;

use crate::scroll::use_page_scroll;

/// How far into its transit a section must be before its reveal-once
/// animations fire.
const REVEAL_THRESHOLD: f64 = 0.08;

pub(crate) struct SectionMotion {
    /// Transit progress in [0, 1] for the section's configured range.
    pub progress: f64,
    /// Latched true the first time the section scrolls into view.
    pub revealed: bool,
}

/// Scroll-driven motion values for one section, derived from the shared
/// geometry rather than a second observation channel.
pub(crate) fn use_section_motion(id: SectionId, range: TransitRange) -> SectionMotion {
    let page = use_page_scroll();
    let mut revealed = use_signal(|| false);

    let state = *page.state.read();
    let progress = page
        .geometry(id)
        .map(|geometry| section_progress(&state, &geometry, range))
        .unwrap_or(0.0);

    use_effect(move || {
        let state = *page.state.read();
        let crossed = page
            .geometry(id)
            .map(|geometry| section_progress(&state, &geometry, range) > REVEAL_THRESHOLD)
            .unwrap_or(false);
        if crossed && !*revealed.peek() {
            revealed.set(true);
        }
    });

    SectionMotion {
        progress,
        revealed: revealed(),
    }
}

pub(crate) fn reveal_class(revealed: bool) -> &'static str {
    if revealed { "reveal visible" } else { "reveal" }
}
