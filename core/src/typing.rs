/// Tick cadence while typing characters in, in milliseconds.
pub const TYPE_DELAY_MS: u32 = 100;
/// Tick cadence while deleting, twice as fast as typing.
pub const DELETE_DELAY_MS: u32 = 50;
/// Dwell on the fully-typed string before deletion starts.
pub const PAUSE_DELAY_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    PausedFull,
    Deleting,
}

/// The decorative role-rotator: types each role out character by character,
/// dwells, deletes it, and moves to the next role forever.
///
/// The machine itself is time-free; [`TypingState::tick`] advances one step
/// and reports how long the driver should wait before the next one, so a
/// single cancellable timer loop can run it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingState {
    role_index: usize,
    shown_chars: usize,
    phase: TypingPhase,
}

impl TypingState {
    pub fn new() -> TypingState {
        TypingState {
            role_index: 0,
            shown_chars: 0,
            phase: TypingPhase::Typing,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// The currently displayed prefix of the current role.
    pub fn text(&self, roles: &[&str]) -> String {
        let Some(role) = roles.get(self.role_index % roles.len().max(1)) else {
            return String::new();
        };
        role.chars().take(self.shown_chars).collect()
    }

    /// Advance one step and return the delay until the next tick, in ms.
    pub fn tick(&mut self, roles: &[&str]) -> u32 {
        if roles.is_empty() {
            return PAUSE_DELAY_MS;
        }
        let role_len = roles[self.role_index % roles.len()].chars().count();

        match self.phase {
            TypingPhase::Typing => {
                if self.shown_chars < role_len {
                    self.shown_chars += 1;
                }
                if self.shown_chars >= role_len {
                    self.phase = TypingPhase::PausedFull;
                    PAUSE_DELAY_MS
                } else {
                    TYPE_DELAY_MS
                }
            }
            TypingPhase::PausedFull => {
                self.phase = TypingPhase::Deleting;
                self.shown_chars = self.shown_chars.saturating_sub(1);
                DELETE_DELAY_MS
            }
            TypingPhase::Deleting => {
                if self.shown_chars > 0 {
                    self.shown_chars -= 1;
                    DELETE_DELAY_MS
                } else {
                    self.role_index = (self.role_index + 1) % roles.len();
                    self.phase = TypingPhase::Typing;
                    TYPE_DELAY_MS
                }
            }
        }
    }
}

impl Default for TypingState {
    fn default() -> TypingState {
        TypingState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [&str; 2] = ["A", "BB"];

    /// Run `ticks` steps and collect the displayed text after each step,
    /// deduplicating consecutive repeats (phase flips with no visible
    /// change).
    fn displayed_sequence(ticks: usize) -> Vec<String> {
        let mut machine = TypingState::new();
        let mut out = vec![machine.text(&ROLES)];
        for _ in 0..ticks {
            machine.tick(&ROLES);
            let text = machine.text(&ROLES);
            if out.last() != Some(&text) {
                out.push(text);
            }
        }
        out
    }

    #[test]
    fn cycles_through_roles_in_order() {
        let seq = displayed_sequence(16);
        let expected: Vec<String> = ["", "A", "", "B", "BB", "B", "", "A"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(&seq[..expected.len()], &expected[..]);
    }

    #[test]
    fn shown_text_never_exceeds_current_role() {
        let mut machine = TypingState::new();
        for _ in 0..100 {
            machine.tick(&ROLES);
            let text = machine.text(&ROLES);
            assert!(text.chars().count() <= 2, "overflow: {text:?}");
        }
    }

    #[test]
    fn delays_follow_the_phase() {
        let mut machine = TypingState::new();

        // Typing "BB" would take TYPE_DELAY steps; "A" completes at once and
        // reports the dwell delay.
        assert_eq!(machine.tick(&ROLES), PAUSE_DELAY_MS);
        assert_eq!(machine.phase(), TypingPhase::PausedFull);

        // Dwell ends, deletion starts at the faster cadence.
        assert_eq!(machine.tick(&ROLES), DELETE_DELAY_MS);
        assert_eq!(machine.phase(), TypingPhase::Deleting);

        // Empty again: wrap to the next role and resume typing.
        assert_eq!(machine.tick(&ROLES), TYPE_DELAY_MS);
        assert_eq!(machine.phase(), TypingPhase::Typing);
        assert_eq!(machine.text(&ROLES), "");

        // First character of the second role.
        assert_eq!(machine.tick(&ROLES), TYPE_DELAY_MS);
        assert_eq!(machine.text(&ROLES), "B");
    }

    #[test]
    fn empty_role_list_is_inert() {
        let mut machine = TypingState::new();
        assert_eq!(machine.tick(&[]), PAUSE_DELAY_MS);
        assert_eq!(machine.text(&[]), "");
    }
}
