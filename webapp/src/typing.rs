use dioxus::prelude::*;

use gloo_timers::future::TimeoutFuture;

use portfolio_core::typing::TypingState;

/// Roles cycled by the typing headline.
pub const ROLES: [&str; 4] = [
    "Software Engineer",
    "Frontend Engineer",
    "Backend Engineer",
    "Mobile Engineer",
];

/// Drive the role-rotator machine on a single timer loop and expose the
/// displayed text. Each caller gets its own instance; the loop dies with the
/// component that created it.
pub fn use_role_rotator() -> Signal<String> {
    let text = use_signal(String::new);

    use_future(move || {
        let mut text = text;
        async move {
            let mut machine = TypingState::new();
            loop {
                let delay = machine.tick(&ROLES);
                text.set(machine.text(&ROLES));
                TimeoutFuture::new(delay).await;
            }
        }
    });

    text
}
