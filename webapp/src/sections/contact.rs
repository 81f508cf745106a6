use dioxus::prelude::*;

use portfolio_core::progress::{TransitRange, parallax_drift};
use portfolio_core::section::SectionId;

use crate::components::icons::IconSend;
use crate::components::toast::use_toasts;
use crate::profile;

use super::{reveal_class, use_section_motion};

/// Contact form and details. Submission deliberately performs no network
/// transmission; it acknowledges with a toast and resets the fields.
#[component]
pub fn Contact() -> Element {
    let motion = use_section_motion(SectionId::Contact, TransitRange::EntryExit);
    let drift = parallax_drift(motion.progress, -100.0);
    let reveal = reveal_class(motion.revealed);

    let mut toasts = use_toasts();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let submit = move |event: Event<FormData>| {
        event.prevent_default();

        toasts.show("Message sent successfully! I'll get back to you soon.");
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
    };

    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "section-inner narrow",
                div { class: "{reveal}",
                    h2 { class: "section-heading", "Get In Touch" }
                    p { class: "section-subheading",
                        "Have a project in mind or want to collaborate? I'd love to \
                         hear from you."
                    }
                }

                form { class: "contact-form {reveal}", onsubmit: submit,
                    div { class: "form-grid",
                        div { class: "form-group",
                            label { class: "form-label", r#for: "name", "Your Name" }
                            input {
                                id: "name",
                                name: "name",
                                class: "form-input",
                                placeholder: "Jane Doe",
                                required: true,
                                value: "{name}",
                                oninput: move |event| name.set(event.value()),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "email", "Your Email" }
                            input {
                                id: "email",
                                name: "email",
                                r#type: "email",
                                class: "form-input",
                                placeholder: "jane@example.com",
                                required: true,
                                value: "{email}",
                                oninput: move |event| email.set(event.value()),
                            }
                        }
                    }

                    div { class: "form-group",
                        label { class: "form-label", r#for: "message", "Message" }
                        textarea {
                            id: "message",
                            name: "message",
                            class: "form-textarea",
                            placeholder: "Tell me about your project or just say hi...",
                            rows: "8",
                            required: true,
                            value: "{message}",
                            oninput: move |event| message.set(event.value()),
                        }
                    }

                    button { class: "btn btn-primary btn-lg", r#type: "submit",
                        IconSend {}
                        "Send Message"
                    }
                }

                div { class: "contact-details {reveal}",
                    div { class: "contact-detail",
                        p { class: "detail-label", "Email" }
                        a { href: "mailto:{profile::EMAIL}", class: "detail-value",
                            "{profile::EMAIL}"
                        }
                    }
                    div { class: "contact-detail",
                        p { class: "detail-label", "Location" }
                        p { class: "detail-value", "{profile::LOCATION}" }
                    }
                    div { class: "contact-detail",
                        p { class: "detail-label", "Availability" }
                        p { class: "detail-value", "Open for opportunities" }
                    }
                }
            }

            div {
                class: "deco-blob deco-left cool",
                style: "transform: translateY({drift}px);",
            }
        }
    }
}
