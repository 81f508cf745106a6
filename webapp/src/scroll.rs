use std::rc::Rc;

use dioxus::prelude::*;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use portfolio_core::scroll::{ScrollState, resolve_active};
use portfolio_core::section::{SectionGeometry, SectionId};

/// Keeps a window event listener attached for exactly as long as the guard
/// lives; dropping it removes the listener so no callback outlives its
/// owning component.
pub(crate) struct EventGuard {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventGuard {
    pub(crate) fn attach(
        target: &web_sys::EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut()>,
    ) -> Option<EventGuard> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(EventGuard {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub(crate) fn on_window(event: &'static str, handler: impl FnMut() + 'static) -> Option<EventGuard> {
        let window = web_sys::window()?;
        EventGuard::attach(&window, event, Closure::new(handler))
    }
}

impl Drop for EventGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Scroll-derived page state: the latest viewport snapshot, the measured
/// section geometry, and the resolved active section.
///
/// Written only by [`use_page_scroll_provider`]; every other component is a
/// reader.
#[derive(Clone, Copy)]
pub struct PageScroll {
    pub state: Signal<ScrollState>,
    pub sections: Signal<Vec<SectionGeometry>>,
    pub active: Signal<SectionId>,
}

impl PageScroll {
    /// Re-measure the document and recompute the active section. Idempotent,
    /// so it doubles as the mount-time seeding call.
    fn sample(&mut self) {
        let Some((state, sections)) = measure() else {
            return;
        };

        let previous = *self.active.peek();
        let next = resolve_active(&state, &sections, previous);
        if next != previous {
            self.active.set(next);
        }

        self.state.set(state);
        self.sections.set(sections);
    }

    pub fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        self.sections.read().iter().copied().find(|s| s.id == id)
    }
}

/// Read the viewport and every registered section anchor. A section whose
/// anchor is missing from the document is skipped rather than reported.
fn measure() -> Option<(ScrollState, Vec<SectionGeometry>)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);

    let mut sections = Vec::with_capacity(SectionId::ALL.len());
    for id in SectionId::ALL {
        let Some(element) = document.get_element_by_id(id.as_str()) else {
            continue;
        };
        let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() else {
            continue;
        };
        sections.push(SectionGeometry {
            id,
            top: html.offset_top() as f64,
            height: html.offset_height() as f64,
        });
    }

    Some((
        ScrollState::new(scroll_y, viewport_height, document_height),
        sections,
    ))
}

/// Install the scroll/resize listeners and provide [`PageScroll`] to the
/// subtree. Call once from the shell.
pub fn use_page_scroll_provider() -> PageScroll {
    let state = use_signal(ScrollState::default);
    let sections = use_signal(Vec::new);
    let active = use_signal(|| SectionId::Home);

    let page = use_context_provider(|| PageScroll {
        state,
        sections,
        active,
    });

    // Listener guards live for the shell's lifetime and detach on drop.
    let _guards = use_hook(|| {
        let scroll = EventGuard::on_window("scroll", {
            let mut page = page;
            move || page.sample()
        });
        let resize = EventGuard::on_window("resize", {
            let mut page = page;
            move || page.sample()
        });
        if scroll.is_none() || resize.is_none() {
            tracing::warn!("failed to attach window scroll listeners");
        }
        Rc::new((scroll, resize))
    });

    // Seed initial state once the section elements exist.
    use_effect(move || {
        let mut page = page;
        page.sample();
    });

    page
}

pub fn use_page_scroll() -> PageScroll {
    use_context::<PageScroll>()
}

/// Smooth-scroll to a section anchor. A missing anchor is a silent no-op.
pub fn scroll_to_section(id: SectionId) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id.as_str()) else {
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
