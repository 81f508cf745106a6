use crate::section::{SectionGeometry, SectionId};

/// Snapshot of the viewport on one scroll or resize event.
///
/// Only the most recent snapshot matters; consumers never queue these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollState {
    pub fn new(scroll_y: f64, viewport_height: f64, document_height: f64) -> ScrollState {
        ScrollState {
            scroll_y: scroll_y.max(0.0),
            viewport_height: viewport_height.max(1.0),
            document_height: document_height.max(0.0),
        }
    }

    /// The vertical coordinate that decides section activation: one third of
    /// the way down the viewport, so a section counts as active once its
    /// heading has scrolled meaningfully into view rather than merely
    /// touching the bottom edge.
    pub fn trigger_line(&self) -> f64 {
        self.scroll_y + self.viewport_height / 3.0
    }
}

impl Default for ScrollState {
    fn default() -> ScrollState {
        ScrollState::new(0.0, 1.0, 1.0)
    }
}

/// Pick the active section for the current scroll position.
///
/// Sections are scanned from last to first; the first whose top sits at or
/// above the trigger line wins, so when several tops are above the line the
/// lowest (most recently entered) section is chosen. If no section
/// qualifies, `previous` is kept unchanged.
pub fn resolve_active(
    state: &ScrollState,
    sections: &[SectionGeometry],
    previous: SectionId,
) -> SectionId {
    let trigger = state.trigger_line();

    for section in sections.iter().rev() {
        if section.top <= trigger {
            return section.id;
        }
    }

    previous
}

const HEADER_FADE_RANGE: f64 = 300.0;
const HEADER_FADE_FLOOR: f64 = 0.3;

/// Opacity for the sidebar brand header, fading over the first 300px of
/// scroll but never below 0.3.
pub fn header_opacity(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / HEADER_FADE_RANGE).max(HEADER_FADE_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<SectionGeometry> {
        // Six full-height sections stacked on a 900px viewport.
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, &id)| SectionGeometry {
                id,
                top: i as f64 * 900.0,
                height: 900.0,
            })
            .collect()
    }

    fn state(scroll_y: f64) -> ScrollState {
        ScrollState::new(scroll_y, 900.0, 6.0 * 900.0)
    }

    #[test]
    fn top_of_page_selects_home() {
        let sections = fixture();
        assert_eq!(
            resolve_active(&state(0.0), &sections, SectionId::Home),
            SectionId::Home
        );
    }

    #[test]
    fn trigger_line_crossing_activates_contact() {
        let sections = fixture();
        let contact_top = sections.last().unwrap().top;

        // One pixel before the trigger line reaches the contact top the
        // previous section still holds; one pixel past it, contact wins.
        let before = state(contact_top - 300.0 - 1.0);
        let after = state(contact_top - 300.0 + 1.0);
        assert_eq!(
            resolve_active(&before, &sections, SectionId::Home),
            SectionId::Projects
        );
        assert_eq!(
            resolve_active(&after, &sections, SectionId::Home),
            SectionId::Contact
        );
    }

    #[test]
    fn no_qualifying_section_keeps_previous() {
        // All tops below the trigger line.
        let sections = vec![SectionGeometry {
            id: SectionId::Contact,
            top: 5000.0,
            height: 900.0,
        }];
        assert_eq!(
            resolve_active(&state(0.0), &sections, SectionId::Skills),
            SectionId::Skills
        );
    }

    #[test]
    fn resolver_is_total_and_idempotent() {
        let sections = fixture();
        for step in 0..200 {
            let s = state(step as f64 * 30.0);
            let first = resolve_active(&s, &sections, SectionId::Home);
            let second = resolve_active(&s, &sections, first);
            assert_eq!(first, second);
            assert!(SectionId::ALL.contains(&first));
        }
    }

    #[test]
    fn active_sequence_is_monotonic_under_forward_scroll() {
        let sections = fixture();
        let index = |id: SectionId| SectionId::ALL.iter().position(|&s| s == id).unwrap();

        let mut active = SectionId::Home;
        let mut last_index = 0;
        let mut scroll = 0.0;
        while scroll < 6.0 * 900.0 {
            active = resolve_active(&state(scroll), &sections, active);
            let current = index(active);
            assert!(current >= last_index, "went backward at scroll={scroll}");
            last_index = current;
            scroll += 17.0;
        }
        assert_eq!(active, SectionId::Contact);
    }

    #[test]
    fn identical_tops_resolve_to_later_registry_entry() {
        // Degenerate layout; the bottom-up scan makes the later entry win.
        let sections = vec![
            SectionGeometry {
                id: SectionId::Home,
                top: 0.0,
                height: 0.0,
            },
            SectionGeometry {
                id: SectionId::About,
                top: 0.0,
                height: 0.0,
            },
        ];
        assert_eq!(
            resolve_active(&state(0.0), &sections, SectionId::Home),
            SectionId::About
        );
    }

    #[test]
    fn header_opacity_fades_to_floor() {
        assert_eq!(header_opacity(0.0), 1.0);
        assert_eq!(header_opacity(150.0), 0.5);
        assert_eq!(header_opacity(300.0), 0.3);
        assert_eq!(header_opacity(5000.0), 0.3);
    }
}
