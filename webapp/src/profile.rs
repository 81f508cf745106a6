//! The person behind the page. Everything the shell, metadata, and footer
//! need to know about the site owner lives here so swapping the persona is a
//! one-file edit.

pub const FULL_NAME: &str = "Alex Moreau";
pub const FIRST_NAME: &str = "Alex";
pub const SITE_URL: &str = "https://alexmoreau.dev";
pub const EMAIL: &str = "hello@alexmoreau.dev";
pub const GITHUB_URL: &str = "https://github.com/alexmoreau";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/alex-moreau-dev";
pub const LOCATION: &str = "Lyon, France";

pub const TAGLINE: &str =
    "A passionate developer crafting scalable, user-friendly web experiences. \
     I turn ideas into elegant solutions with clean code and modern technologies.";

pub const SUMMARY: &str =
    "Full-stack developer specializing in responsive interfaces and reliable \
     backend services. Portfolio showcasing projects, experience, and skills.";

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: GITHUB_URL,
    },
    SocialLink {
        label: "LinkedIn",
        href: LINKEDIN_URL,
    },
    SocialLink {
        label: "Email",
        href: "mailto:hello@alexmoreau.dev",
    },
];
