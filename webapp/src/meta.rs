use dioxus::prelude::*;

use serde_json::json;

use crate::profile;

/// Write the document title, meta/Open Graph tags, and the JSON-LD
/// structured-data scripts once at shell mount. None of this interacts with
/// the scroll or theme mechanisms.
pub fn use_document_metadata() {
    use_effect(|| {
        if inject().is_none() {
            tracing::warn!("document metadata injection incomplete");
        }
    });
}

fn inject() -> Option<()> {
    let document = web_sys::window()?.document()?;

    let title = format!("{} | Full-Stack Developer Portfolio", profile::FULL_NAME);
    document.set_title(&title);

    upsert_meta(&document, "name", "description", profile::SUMMARY)?;
    upsert_meta(
        &document,
        "name",
        "keywords",
        "portfolio, developer, web development, full-stack, frontend, backend",
    )?;
    upsert_meta(&document, "name", "author", profile::FULL_NAME)?;

    upsert_meta(&document, "property", "og:title", &title)?;
    upsert_meta(&document, "property", "og:description", profile::SUMMARY)?;
    upsert_meta(&document, "property", "og:type", "website")?;
    upsert_meta(&document, "property", "og:url", profile::SITE_URL)?;

    upsert_json_ld(&document, "schema-person", &person_schema())?;
    upsert_json_ld(&document, "schema-website", &website_schema())?;

    Some(())
}

/// Update an existing `<meta>` tag or append a new one to the head.
fn upsert_meta(
    document: &web_sys::Document,
    attr: &str,
    name: &str,
    content: &str,
) -> Option<()> {
    let selector = format!("meta[{attr}=\"{name}\"]");
    let element = match document.query_selector(&selector).ok()? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("meta").ok()?;
            created.set_attribute(attr, name).ok()?;
            document.head()?.append_child(&created).ok()?;
            created
        }
    };

    element.set_attribute("content", content).ok()
}

fn upsert_json_ld(
    document: &web_sys::Document,
    id: &str,
    blob: &serde_json::Value,
) -> Option<()> {
    let element = match document.get_element_by_id(id) {
        Some(existing) => existing,
        None => {
            let created = document.create_element("script").ok()?;
            created.set_attribute("type", "application/ld+json").ok()?;
            created.set_attribute("id", id).ok()?;
            document.head()?.append_child(&created).ok()?;
            created
        }
    };

    element.set_text_content(Some(&blob.to_string()));
    Some(())
}

fn person_schema() -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": profile::FULL_NAME,
        "url": profile::SITE_URL,
        "email": profile::EMAIL,
        "jobTitle": "Full-Stack Developer",
        "sameAs": [profile::GITHUB_URL, profile::LINKEDIN_URL],
    })
}

fn website_schema() -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": format!("{} Portfolio", profile::FULL_NAME),
        "url": profile::SITE_URL,
        "author": { "@type": "Person", "name": profile::FULL_NAME },
    })
}
