//! HTML rendering for the NOVA site pages.
//!
//! Each page has its own body renderer; [`render_page`] wraps the body in the
//! shared shell. All rendering uses [maud](https://maud.lambda.xyz/), so
//! every dynamic value is escaped.

pub mod components;
pub mod contact;
pub mod features;
pub mod home;
pub mod specs;

use maud::Markup;

use crate::config::PagesConfig;

/// One of the four navigable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Features,
    Specs,
    Contacts,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Features, Page::Specs, Page::Contacts];

    /// Route path serving this page.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/home",
            Page::Features => "/features",
            Page::Specs => "/specs",
            Page::Contacts => "/contacts",
        }
    }

    /// Title suffix, as in `"NOVA - Features"`.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Features => "Features",
            Page::Specs => "Specs",
            Page::Contacts => "Contacts",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Contacts => "Contact",
            other => other.title(),
        }
    }
}

/// Render a complete HTML document for `page`.
pub fn render_page(page: Page, config: &PagesConfig) -> Markup {
    let body = match page {
        Page::Home => home::render(&config.product_price),
        Page::Features => features::render(&config.site_name, &nova_core::catalog::features()),
        Page::Specs => specs::render(&nova_core::catalog::specs()),
        Page::Contacts => contact::render(),
    };

    components::page_shell(page, &config.site_name, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_distinct() {
        let mut paths: Vec<_> = Page::ALL.iter().map(|p| p.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn contacts_nav_label_is_singular() {
        assert_eq!(Page::Contacts.title(), "Contacts");
        assert_eq!(Page::Contacts.nav_label(), "Contact");
        assert_eq!(Page::Specs.nav_label(), "Specs");
    }

    #[test]
    fn render_page_titles() {
        let config = PagesConfig::default();
        for page in Page::ALL {
            let html = render_page(page, &config).into_string();
            let title = format!("<title>NOVA - {}</title>", page.title());
            assert!(html.contains(&title), "{page:?}");
        }
    }
}
