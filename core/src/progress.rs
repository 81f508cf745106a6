use crate::scroll::ScrollState;
use crate::section::SectionGeometry;

/// Fraction of the whole document that has been scrolled, in [0, 1].
///
/// Zero when the page has no scroll range at all.
pub fn global_progress(state: &ScrollState) -> f64 {
    let range = state.document_height - state.viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (state.scroll_y / range).clamp(0.0, 1.0)
}

/// Which scroll range a section's transit progress is measured over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitRange {
    /// 0 when the section top reaches the viewport bottom, 1 when its bottom
    /// passes the viewport top. The common case for mid-page sections.
    EntryExit,
    /// 0 while the section top is at the viewport top, 1 when its bottom
    /// passes the viewport top. Used by the hero, which starts on screen.
    ExitOnly,
}

/// Normalized [0, 1] progress of a section's transit through the viewport.
pub fn section_progress(
    state: &ScrollState,
    section: &SectionGeometry,
    range: TransitRange,
) -> f64 {
    match range {
        TransitRange::EntryExit => {
            let span = state.viewport_height + section.height;
            if span <= 0.0 {
                return 0.0;
            }
            ((state.scroll_y + state.viewport_height - section.top) / span).clamp(0.0, 1.0)
        }
        TransitRange::ExitOnly => {
            if section.height <= 0.0 {
                return 0.0;
            }
            ((state.scroll_y - section.top) / section.height).clamp(0.0, 1.0)
        }
    }
}

/// Piecewise-linear interpolation over sorted (t, value) control points,
/// clamped to the first/last value outside the covered range.
#[derive(Clone, Copy, Debug)]
pub struct Curve {
    points: &'static [(f64, f64)],
}

impl Curve {
    pub const fn new(points: &'static [(f64, f64)]) -> Curve {
        Curve { points }
    }

    pub fn eval(&self, t: f64) -> f64 {
        let Some(&(first_t, first_v)) = self.points.first() else {
            return 0.0;
        };
        if t <= first_t {
            return first_v;
        }

        for pair in self.points.windows(2) {
            let (t0, v0) = pair[0];
            let (t1, v1) = pair[1];
            if t <= t1 {
                if t1 <= t0 {
                    return v1;
                }
                let f = (t - t0) / (t1 - t0);
                return v0 + (v1 - v0) * f;
            }
        }

        self.points.last().map(|&(_, v)| v).unwrap_or(0.0)
    }
}

/// Opacity through a section transit: invisible at the edges, fully opaque
/// through the middle.
pub const FADE_THROUGH: Curve =
    Curve::new(&[(0.0, 0.0), (0.2, 1.0), (0.9, 1.0), (1.0, 0.0)]);

/// Variant that starts fading out a little earlier, for the longer
/// experience timeline.
pub const FADE_THROUGH_EARLY: Curve =
    Curve::new(&[(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)]);

/// Hero content opacity while the hero scrolls away.
pub const HERO_EXIT_FADE: Curve = Curve::new(&[(0.0, 1.0), (0.5, 0.5), (1.0, 0.0)]);

/// Vertical drift for decorative elements: `amplitude` px at the start of a
/// transit, `-amplitude` px at the end. Negative amplitudes reverse the
/// direction.
pub fn parallax_drift(progress: f64, amplitude: f64) -> f64 {
    amplitude * (1.0 - 2.0 * progress.clamp(0.0, 1.0))
}

/// Downward shift of the hero backdrop, as a percentage of its own height,
/// while the hero scrolls out.
pub fn hero_backdrop_shift(progress: f64) -> f64 {
    50.0 * progress.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionId;

    fn state(scroll_y: f64) -> ScrollState {
        ScrollState::new(scroll_y, 900.0, 5400.0)
    }

    #[test]
    fn global_progress_clamps_to_unit_range() {
        assert_eq!(global_progress(&state(0.0)), 0.0);
        assert_eq!(global_progress(&state(2250.0)), 0.5);
        assert_eq!(global_progress(&state(4500.0)), 1.0);
        assert_eq!(global_progress(&state(9999.0)), 1.0);
    }

    #[test]
    fn global_progress_of_unscrollable_page_is_zero() {
        let short = ScrollState::new(0.0, 900.0, 600.0);
        assert_eq!(global_progress(&short), 0.0);
    }

    #[test]
    fn entry_exit_transit_spans_viewport_plus_section() {
        let section = SectionGeometry {
            id: SectionId::About,
            top: 900.0,
            height: 900.0,
        };
        // Top touches the viewport bottom at scroll 0.
        assert_eq!(
            section_progress(&state(0.0), &section, TransitRange::EntryExit),
            0.0
        );
        // Bottom passes the viewport top at scroll 1800.
        assert_eq!(
            section_progress(&state(1800.0), &section, TransitRange::EntryExit),
            1.0
        );
        assert_eq!(
            section_progress(&state(900.0), &section, TransitRange::EntryExit),
            0.5
        );
    }

    #[test]
    fn exit_only_transit_ignores_entry() {
        let hero = SectionGeometry {
            id: SectionId::Home,
            top: 0.0,
            height: 900.0,
        };
        assert_eq!(
            section_progress(&state(0.0), &hero, TransitRange::ExitOnly),
            0.0
        );
        assert_eq!(
            section_progress(&state(450.0), &hero, TransitRange::ExitOnly),
            0.5
        );
        assert_eq!(
            section_progress(&state(900.0), &hero, TransitRange::ExitOnly),
            1.0
        );
    }

    #[test]
    fn replaying_a_scroll_trace_is_deterministic() {
        let section = SectionGeometry {
            id: SectionId::Projects,
            top: 3600.0,
            height: 900.0,
        };
        let trace: Vec<f64> = (0..50).map(|i| i as f64 * 100.0).collect();
        let run = || -> Vec<f64> {
            trace
                .iter()
                .map(|&y| section_progress(&state(y), &section, TransitRange::EntryExit))
                .collect()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn fade_through_control_points() {
        assert_eq!(FADE_THROUGH.eval(0.0), 0.0);
        assert_eq!(FADE_THROUGH.eval(0.1), 0.5);
        assert_eq!(FADE_THROUGH.eval(0.2), 1.0);
        assert_eq!(FADE_THROUGH.eval(0.5), 1.0);
        assert_eq!(FADE_THROUGH.eval(0.9), 1.0);
        assert_eq!(FADE_THROUGH.eval(1.0), 0.0);
    }

    #[test]
    fn curves_clamp_outside_their_range() {
        assert_eq!(FADE_THROUGH.eval(-1.0), 0.0);
        assert_eq!(FADE_THROUGH.eval(2.0), 0.0);
        assert_eq!(HERO_EXIT_FADE.eval(-0.5), 1.0);
        assert_eq!(HERO_EXIT_FADE.eval(1.5), 0.0);
    }

    #[test]
    fn hero_exit_fade_midpoint() {
        assert_eq!(HERO_EXIT_FADE.eval(0.5), 0.5);
        assert_eq!(HERO_EXIT_FADE.eval(0.75), 0.25);
    }

    #[test]
    fn parallax_drift_is_symmetric() {
        assert_eq!(parallax_drift(0.0, 100.0), 100.0);
        assert_eq!(parallax_drift(0.5, 100.0), 0.0);
        assert_eq!(parallax_drift(1.0, 100.0), -100.0);
        // Reversed direction for negative amplitudes.
        assert_eq!(parallax_drift(0.0, -50.0), -50.0);
        assert_eq!(parallax_drift(1.0, -50.0), 50.0);
    }

    #[test]
    fn hero_backdrop_shift_tracks_progress() {
        assert_eq!(hero_backdrop_shift(0.0), 0.0);
        assert_eq!(hero_backdrop_shift(0.5), 25.0);
        assert_eq!(hero_backdrop_shift(1.0), 50.0);
        assert_eq!(hero_backdrop_shift(3.0), 50.0);
    }
}
