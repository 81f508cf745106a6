use dioxus::prelude::*;

use portfolio_core::progress::{FADE_THROUGH, TransitRange, parallax_drift};
use portfolio_core::section::SectionId;

use super::{reveal_class, use_section_motion};

struct SkillBadge {
    name: &'static str,
    logo: &'static str,
    category: &'static str,
}

static SKILLS: [SkillBadge; 12] = [
    SkillBadge {
        name: "Rust",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/rust/rust-original.svg",
        category: "Backend",
    },
    SkillBadge {
        name: "TypeScript",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/typescript/typescript-original.svg",
        category: "Frontend",
    },
    SkillBadge {
        name: "JavaScript",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/javascript/javascript-original.svg",
        category: "Frontend",
    },
    SkillBadge {
        name: "React",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/react/react-original.svg",
        category: "Frontend",
    },
    SkillBadge {
        name: "HTML5",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/html5/html5-original.svg",
        category: "Frontend",
    },
    SkillBadge {
        name: "CSS3",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/css3/css3-original.svg",
        category: "Frontend",
    },
    SkillBadge {
        name: "Node.js",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/nodejs/nodejs-original.svg",
        category: "Backend",
    },
    SkillBadge {
        name: "PostgreSQL",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/postgresql/postgresql-original.svg",
        category: "Backend",
    },
    SkillBadge {
        name: "Docker",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/docker/docker-original.svg",
        category: "Tooling",
    },
    SkillBadge {
        name: "Git",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/git/git-original.svg",
        category: "Tooling",
    },
    SkillBadge {
        name: "GraphQL",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/graphql/graphql-plain.svg",
        category: "Learning",
    },
    SkillBadge {
        name: "Kubernetes",
        logo: "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/kubernetes/kubernetes-plain.svg",
        category: "Learning",
    },
];

#[component]
pub fn Skills() -> Element {
    let motion = use_section_motion(SectionId::Skills, TransitRange::EntryExit);
    let opacity = FADE_THROUGH.eval(motion.progress);
    // Reversed drift relative to the neighbouring sections.
    let drift = parallax_drift(motion.progress, -50.0);
    let reveal = reveal_class(motion.revealed);

    let cards = SKILLS.iter().enumerate().map(|(index, skill)| {
        let delay = index * 50;
        rsx! {
            div {
                key: "{skill.name}",
                class: "skill-card {reveal}",
                style: "transition-delay: {delay}ms;",
                title: "{skill.category}",
                img {
                    src: skill.logo,
                    alt: skill.name,
                    class: "skill-logo",
                }
                p { class: "skill-name", "{skill.name}" }
            }
        }
    });

    rsx! {
        section { id: "skills", class: "section skills",
            div { class: "section-inner", style: "opacity: {opacity};",
                div { class: "{reveal}",
                    h2 { class: "section-heading", "Skills & Technologies" }
                    p { class: "section-subheading", "Tools and technologies I work with" }
                }

                div { class: "skills-grid", {cards} }

                div { class: "skills-footnote {reveal}",
                    p {
                        "Also experienced with: CI pipelines, REST APIs, responsive design, \
                         accessibility audits, and agile delivery"
                    }
                }
            }

            div {
                class: "deco-blob deco-left",
                style: "transform: translateY({drift}px);",
            }
        }
    }
}
