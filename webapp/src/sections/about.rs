use dioxus::prelude::*;

use portfolio_core::progress::{FADE_THROUGH, TransitRange, parallax_drift};
use portfolio_core::section::SectionId;

use super::{reveal_class, use_section_motion};

static PARAGRAPHS: [&str; 4] = [
    "I am a software engineer focused on building practical, scalable solutions \
     that solve real problems. I turn ideas into functional products by combining \
     clean design, efficient architecture, and a strong understanding of user needs.",
    "My experience spans the entire web development lifecycle, from crafting \
     responsive, pixel-perfect interfaces to designing secure and efficient \
     backend systems, and I have shipped applications across the stack.",
    "I work confidently with modern technologies to build fast, maintainable, \
     and production-ready applications. My approach emphasizes clean code, \
     performance, and reusable components that scale as projects grow.",
    "Beyond writing code, I focus on creating value by improving workflows, \
     enhancing user experience, and delivering solutions that are reliable and \
     easy to maintain. I thrive in collaborative environments and enjoy hard \
     problems.",
];

#[component]
pub fn About() -> Element {
    let motion = use_section_motion(SectionId::About, TransitRange::EntryExit);
    let opacity = FADE_THROUGH.eval(motion.progress);
    let drift = parallax_drift(motion.progress, 100.0);
    let reveal = reveal_class(motion.revealed);

    let paragraphs = PARAGRAPHS.iter().enumerate().map(|(index, text)| {
        let delay = index * 150;
        rsx! {
            p {
                key: "{index}",
                class: reveal,
                style: "transition-delay: {delay}ms;",
                "{text}"
            }
        }
    });

    rsx! {
        section { id: "about", class: "section about",
            div { class: "section-inner narrow", style: "opacity: {opacity};",
                h2 { class: "section-heading {reveal}", "About Me" }

                div { class: "about-paragraphs", {paragraphs} }

                div { class: "about-quote {reveal}",
                    p { class: "quote-text",
                        "\"The only way to do great work is to love what you do.\""
                    }
                }
            }

            div {
                class: "deco-blob deco-right",
                style: "transform: translateY({drift}px);",
            }
        }
    }
}
