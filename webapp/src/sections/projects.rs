use dioxus::prelude::*;

use portfolio_core::progress::{FADE_THROUGH, TransitRange, parallax_drift};
use portfolio_core::section::SectionId;

use crate::components::icons::{IconExternalLink, IconGithub};
use crate::profile;

use super::{reveal_class, use_section_motion};

struct Project {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
    repo: &'static str,
    demo: &'static str,
}

static PROJECTS: [Project; 5] = [
    Project {
        title: "Ledgerline",
        description: "A budgeting platform with shared households, recurring \
                      transaction detection, and exportable monthly reports.",
        image: "/assets/projects/ledgerline.png",
        tags: &["Rust", "Axum", "PostgreSQL", "React"],
        repo: "https://github.com/alexmoreau/ledgerline",
        demo: "https://ledgerline.alexmoreau.dev",
    },
    Project {
        title: "Clinic Desk",
        description: "Appointment and patient-record management for small \
                      practices, with role-based access and printable schedules.",
        image: "/assets/projects/clinic-desk.png",
        tags: &["TypeScript", "Next.js", "REST API", "Tailwind"],
        repo: "https://github.com/alexmoreau/clinic-desk",
        demo: "https://clinic-desk.alexmoreau.dev",
    },
    Project {
        title: "Trailhead Jobs",
        description: "A recruitment board connecting outdoor-industry employers \
                      with seasonal staff, including application tracking.",
        image: "/assets/projects/trailhead.png",
        tags: &["React", "GraphQL", "Node.js", "Stripe"],
        repo: "https://github.com/alexmoreau/trailhead-jobs",
        demo: "https://trailhead.alexmoreau.dev",
    },
    Project {
        title: "Maison Brocante",
        description: "An e-commerce storefront for a family antiques business, \
                      with product listings, a cart, and secure checkout.",
        image: "/assets/projects/brocante.png",
        tags: &["React", "JavaScript", "Tailwind", "Supabase"],
        repo: "https://github.com/alexmoreau/maison-brocante",
        demo: "https://brocante.alexmoreau.dev",
    },
    Project {
        title: "Waypoint",
        description: "A mobile hiking companion with offline maps, route \
                      journals, and community-sourced trail conditions.",
        image: "/assets/projects/waypoint.png",
        tags: &["React Native", "SQLite", "REST API"],
        repo: "https://github.com/alexmoreau/waypoint",
        demo: "https://waypoint.alexmoreau.dev",
    },
];

#[component]
pub fn Projects() -> Element {
    let motion = use_section_motion(SectionId::Projects, TransitRange::EntryExit);
    let opacity = FADE_THROUGH.eval(motion.progress);
    let drift = parallax_drift(motion.progress, 50.0);
    let reveal = reveal_class(motion.revealed);

    let rows = PROJECTS.iter().enumerate().map(|(index, project)| {
        let delay = index * 100;
        let row_class = if index % 2 == 0 {
            "project-row"
        } else {
            "project-row flipped"
        };

        let tags = project.tags.iter().map(|tag| {
            rsx! {
                span { key: "{tag}", class: "badge", "{tag}" }
            }
        });

        rsx! {
            div {
                key: "{project.title}",
                class: "{row_class} {reveal}",
                style: "transition-delay: {delay}ms;",

                div { class: "project-visual",
                    img {
                        src: project.image,
                        alt: project.title,
                        class: "project-image",
                    }
                    div { class: "project-visual-overlay" }
                }

                div { class: "project-info",
                    h3 { class: "project-title", "{project.title}" }
                    p { class: "project-description", "{project.description}" }
                    div { class: "badge-row", {tags} }
                    div { class: "project-links",
                        a {
                            href: project.repo,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "btn btn-outline btn-sm",
                            IconGithub {}
                            "Code"
                        }
                        a {
                            href: project.demo,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "btn btn-primary btn-sm",
                            IconExternalLink {}
                            "Live Demo"
                        }
                    }
                }
            }
        }
    });

    rsx! {
        section { id: "projects", class: "section projects",
            div { class: "section-inner", style: "opacity: {opacity};",
                div { class: "{reveal}",
                    h2 { class: "section-heading", "Featured Projects" }
                    p { class: "section-subheading", "A selection of my recent work" }
                }

                div { class: "project-rows", {rows} }

                div { class: "projects-more {reveal}",
                    a {
                        href: profile::GITHUB_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "btn btn-outline btn-lg",
                        IconGithub {}
                        "View More on GitHub"
                    }
                }
            }

            div {
                class: "deco-blob deco-right warm",
                style: "transform: translateY({drift}px);",
            }
        }
    }
}
