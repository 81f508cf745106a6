/// The fixed set of anchorable content blocks, in page order.
///
/// The order of [`SectionId::ALL`] is significant: the active-section
/// resolver scans it from the bottom up, and the navigation menus render it
/// top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Stable anchor id, usable as a same-page jump target.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Display label for the navigation menus.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|id| id.as_str() == anchor)
    }
}

/// Measured position of one section in the document, in CSS pixels.
///
/// Derived from layout on every scroll/resize event and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_at_home_and_ends_at_contact() {
        assert_eq!(SectionId::ALL.first(), Some(&SectionId::Home));
        assert_eq!(SectionId::ALL.last(), Some(&SectionId::Contact));
        assert_eq!(SectionId::ALL.len(), 6);
    }

    #[test]
    fn anchors_are_unique_and_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.as_str()), Some(id));
        }
        assert_eq!(SectionId::from_anchor("footer"), None);
    }
}
