//! Static page table for the routes the navigation links point at.

use sitenav_types::{Label, Locale, text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub summary: &'static str,
}

struct Entry {
    route: &'static str,
    en: Page,
    de: Page,
}

const PAGES: &[Entry] = &[
    Entry {
        route: "/",
        en: Page {
            title: "Software that ships",
            summary: "We design, build and run web platforms for growing teams.",
        },
        de: Page {
            title: "Software, die ankommt",
            summary: "Wir entwerfen, bauen und betreiben Webplattformen für wachsende Teams.",
        },
    },
    Entry {
        route: "/services",
        en: Page {
            title: "Services",
            summary: "Product engineering, cloud migration and technical audits.",
        },
        de: Page {
            title: "Leistungen",
            summary: "Produktentwicklung, Cloud-Migration und technische Audits.",
        },
    },
    Entry {
        route: "/blog",
        en: Page {
            title: "Blog",
            summary: "Notes from recent projects.",
        },
        de: Page {
            title: "Blog",
            summary: "Notizen aus aktuellen Projekten.",
        },
    },
    Entry {
        route: "/about",
        en: Page {
            title: "About us",
            summary: "A small senior team with a long track record.",
        },
        de: Page {
            title: "Über uns",
            summary: "Ein kleines, erfahrenes Team.",
        },
    },
    Entry {
        route: "/contact",
        en: Page {
            title: "Contact",
            summary: "Tell us about your project.",
        },
        de: Page {
            title: "Kontakt",
            summary: "Erzählen Sie uns von Ihrem Projekt.",
        },
    },
    Entry {
        route: "/imprint",
        en: Page {
            title: "Imprint",
            summary: "Legal information about the company.",
        },
        de: Page {
            title: "Impressum",
            summary: "Rechtliche Angaben zum Unternehmen.",
        },
    },
    Entry {
        route: "/privacy",
        en: Page {
            title: "Privacy",
            summary: "How we handle personal data.",
        },
        de: Page {
            title: "Datenschutz",
            summary: "Wie wir mit personenbezogenen Daten umgehen.",
        },
    },
];

/// Look up a route, ignoring a trailing slash. Unknown routes get a not-found page.
#[must_use]
pub fn page_for(route: &str, locale: Locale) -> Page {
    let normalized = match route.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    PAGES
        .iter()
        .find(|entry| entry.route == normalized)
        .map_or_else(
            || Page {
                title: text(Label::PageNotFound, locale),
                summary: "",
            },
            |entry| match locale {
                Locale::En => entry.en,
                Locale::De => entry.de,
            },
        )
}

#[must_use]
pub fn is_known(route: &str) -> bool {
    let normalized = match route.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    PAGES.iter().any(|entry| entry.route == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_titles() {
        assert_eq!(page_for("/services", Locale::En).title, "Services");
        assert_eq!(page_for("/services/", Locale::De).title, "Leistungen");
        assert_eq!(page_for("/", Locale::En).title, "Software that ships");
    }

    #[test]
    fn unknown_route_is_not_found() {
        assert!(!is_known("/careers"));
        assert_eq!(page_for("/careers", Locale::En).title, "Page not found");
        assert_eq!(page_for("/careers", Locale::De).title, "Seite nicht gefunden");
    }
}
