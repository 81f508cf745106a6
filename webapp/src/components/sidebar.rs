use dioxus::prelude::*;

use portfolio_core::scroll::header_opacity;
use portfolio_core::section::SectionId;
use portfolio_core::theme::Theme;

use crate::common;
use crate::components::icons::{
    IconClose, IconGithub, IconLinkedin, IconMail, IconMenu, IconMoon, IconSun,
};
use crate::profile;
use crate::scroll::{scroll_to_section, use_page_scroll};
use crate::typing::use_role_rotator;

#[derive(Clone, PartialEq, Props)]
struct NavEntryProps {
    id: SectionId,
    on_select: EventHandler<SectionId>,
}

#[component]
fn NavEntry(props: NavEntryProps) -> Element {
    let id = props.id;
    let on_select = props.on_select;

    let page = use_page_scroll();
    let is_active = *page.active.read() == id;

    rsx! {
        button {
            class: if is_active { "nav-entry active" } else { "nav-entry" },
            onclick: move |_| on_select.call(id),
            span { class: "nav-entry-label",
                "{id.label()}"
                if is_active {
                    span { class: "nav-entry-underline" }
                }
            }
        }
    }
}

fn social_icon(label: &str) -> Element {
    match label {
        "GitHub" => rsx! { IconGithub {} },
        "LinkedIn" => rsx! { IconLinkedin {} },
        _ => rsx! { IconMail {} },
    }
}

#[component]
fn SocialLinks() -> Element {
    rsx! {
        div { class: "social-links",
            for link in profile::SOCIAL_LINKS.iter() {
                a {
                    key: "{link.label}",
                    href: link.href,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    aria_label: link.label,
                    class: "social-link",
                    {social_icon(link.label)}
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct BrandHeaderProps {
    typed: String,
    opacity: f64,
}

#[component]
fn BrandHeader(props: BrandHeaderProps) -> Element {
    rsx! {
        header { class: "brand", style: "opacity: {props.opacity};",
            h1 { class: "brand-name", "{profile::FULL_NAME}" }
            div { class: "brand-role",
                p {
                    "{props.typed}"
                    span { class: "typing-caret" }
                }
            }
        }
    }
}

/// Desktop sidebar plus the mobile header and slide-in menu. All three share
/// the active-section context, the typing headline, and the theme toggle.
#[component]
pub fn Sidebar() -> Element {
    let mut theme = crate::theme::use_theme();
    let page = use_page_scroll();
    let typed = use_role_rotator();
    let mut menu_open = use_signal(|| false);

    let brand_opacity = header_opacity(page.state.read().scroll_y);
    let dark = theme.mode() == Theme::Dark;
    let year = common::current_year();

    let select = move |id: SectionId| {
        scroll_to_section(id);
        menu_open.set(false);
    };

    rsx! {
        // Mobile header bar
        header { class: "mobile-header",
            h2 { class: "brand-name", "{profile::FULL_NAME}" }
            div { class: "mobile-header-actions",
                button {
                    class: "icon-button",
                    aria_label: "Toggle theme",
                    onclick: move |_| theme.toggle(),
                    if dark {
                        IconSun {}
                    } else {
                        IconMoon {}
                    }
                }
                button {
                    class: "icon-button",
                    aria_label: "Toggle menu",
                    onclick: move |_| {
                        let open = *menu_open.peek();
                        menu_open.set(!open);
                    },
                    if menu_open() {
                        IconClose {}
                    } else {
                        IconMenu {}
                    }
                }
            }
        }

        // Mobile slide-in menu
        if menu_open() {
            div {
                class: "mobile-menu-backdrop",
                onclick: move |_| menu_open.set(false),
            }
            aside { class: "mobile-menu",
                div { class: "mobile-menu-body",
                    BrandHeader { typed: typed(), opacity: brand_opacity }
                    nav { class: "side-nav",
                        for id in SectionId::ALL {
                            NavEntry { id, on_select: select }
                        }
                    }
                    SocialLinks {}
                }
                div { class: "panel-footer",
                    p { "© {year} {profile::FULL_NAME}" }
                }
            }
        }

        // Desktop sidebar
        aside { class: "side-panel",
            div { class: "side-panel-body",
                BrandHeader { typed: typed(), opacity: brand_opacity }
                nav { class: "side-nav",
                    for id in SectionId::ALL {
                        NavEntry { id, on_select: select }
                    }
                }
                SocialLinks {}
                button {
                    class: "btn btn-outline theme-toggle",
                    onclick: move |_| theme.toggle(),
                    if dark {
                        IconSun {}
                        "Light Mode"
                    } else {
                        IconMoon {}
                        "Dark Mode"
                    }
                }
            }
            div { class: "panel-footer",
                p { "© {year} {profile::FULL_NAME}" }
            }
        }
    }
}
