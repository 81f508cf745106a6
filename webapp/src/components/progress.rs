use dioxus::prelude::*;

use portfolio_core::progress::global_progress;

use crate::scroll::use_page_scroll;

/// Fixed bar across the top of the content pane showing how far the page has
/// been scrolled. The width transition in the stylesheet smooths the jumps
/// between scroll events.
#[component]
pub fn ScrollProgressBar() -> Element {
    let page = use_page_scroll();
    let fraction = global_progress(&page.state.read());

    rsx! {
        div {
            class: "scroll-progress",
            style: "transform: scaleX({fraction});",
        }
    }
}
