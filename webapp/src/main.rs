#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::background::ParticleField;
use components::progress::ScrollProgressBar;
use components::sidebar::Sidebar;
use components::toast::Toaster;

mod meta;
mod profile;
mod scroll;
mod sections;
mod theme;
mod typing;

use sections::{About, Contact, Experience, Footer, Hero, Projects, Skills};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    // Single-writer state holders, provided once here and read everywhere
    // else: theme, scroll/active-section tracking, and the toast slot.
    theme::use_theme_provider();
    scroll::use_page_scroll_provider();
    components::toast::use_toast_provider();

    meta::use_document_metadata();

    rsx! {
        style { "{common::style::GLOBAL_STYLES}" }

        ScrollProgressBar {}
        ParticleField {}

        div { class: "app-shell",
            Sidebar {}

            main { class: "content-pane",
                Hero {}
                About {}
                Experience {}
                Skills {}
                Projects {}
                Contact {}
                Footer {}
            }
        }

        Toaster {}
    }
}
