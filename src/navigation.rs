use thiserror::Error;

/// A named, anchor-addressable region of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub id: &'static str,
}

impl Section {
    pub const HERO: Section = Section { label: "Início", id: "hero" };
    pub const PROJECTS: Section = Section { label: "Projetos", id: "projects" };
    pub const ABOUT: Section = Section { label: "Sobre", id: "about" };
    pub const CONTACT: Section = Section { label: "Contato", id: "contact" };
}

/// Navigable sections in page order.
pub const SECTIONS: [Section; 4] = [
    Section::HERO,
    Section::PROJECTS,
    Section::ABOUT,
    Section::CONTACT,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no element with id `{0}` is rendered")]
    NotFound(String),
    #[error("no document available")]
    NoDocument,
}

/// Something that can bring a section element to the top of the viewport.
pub trait ScrollSurface {
    fn scroll_to(&self, id: &str) -> Result<(), NavigationError>;
}

/// Scrolls the live document with `scrollIntoView({behavior: "smooth", block: "start"})`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScroller;

impl ScrollSurface for DocumentScroller {
    fn scroll_to(&self, id: &str) -> Result<(), NavigationError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(NavigationError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| NavigationError::NotFound(id.to_string()))?;

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

/// Moves the view to a named section of the page.
///
/// Calls are independent: going to the same section twice scrolls twice.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionNavigator<S: ScrollSurface = DocumentScroller> {
    surface: S,
}

impl<S: ScrollSurface> SectionNavigator<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Smooth-scroll to `id`. Unknown or unrendered sections are ignored so a
    /// broken anchor never breaks the page.
    pub fn go_to(&self, id: &str) {
        if let Err(e) = self.try_go_to(id) {
            log::debug!("Portfolio: navigation skipped: {}", e);
        }
    }

    pub fn try_go_to(&self, id: &str) -> Result<(), NavigationError> {
        self.surface.scroll_to(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// A fake page: a set of rendered ids and the id currently at the top.
    struct FakePage {
        rendered: HashSet<&'static str>,
        top: RefCell<Option<String>>,
        scrolls: RefCell<usize>,
    }

    impl FakePage {
        fn with_sections() -> Self {
            Self {
                rendered: SECTIONS.iter().map(|s| s.id).collect(),
                top: RefCell::new(None),
                scrolls: RefCell::new(0),
            }
        }

        fn top(&self) -> Option<String> {
            self.top.borrow().clone()
        }
    }

    impl ScrollSurface for &FakePage {
        fn scroll_to(&self, id: &str) -> Result<(), NavigationError> {
            if !self.rendered.contains(id) {
                return Err(NavigationError::NotFound(id.to_string()));
            }
            *self.top.borrow_mut() = Some(id.to_string());
            *self.scrolls.borrow_mut() += 1;
            Ok(())
        }
    }

    struct NoDocument;

    impl ScrollSurface for NoDocument {
        fn scroll_to(&self, _id: &str) -> Result<(), NavigationError> {
            Err(NavigationError::NoDocument)
        }
    }

    #[test]
    fn test_sections_in_page_order() {
        let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["hero", "projects", "about", "contact"]);
    }

    #[test]
    fn test_section_ids_unique() {
        let unique: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(unique.len(), SECTIONS.len());
    }

    #[test]
    fn test_go_to_known_section_brings_it_to_top() {
        let page = FakePage::with_sections();
        let navigator = SectionNavigator::new(&page);

        for section in SECTIONS {
            navigator.go_to(section.id);
            assert_eq!(page.top().as_deref(), Some(section.id));
        }
    }

    #[test]
    fn test_go_to_unknown_section_is_a_no_op() {
        let page = FakePage::with_sections();
        let navigator = SectionNavigator::new(&page);

        navigator.go_to("about");
        navigator.go_to("nonexistent-id");

        assert_eq!(page.top().as_deref(), Some("about"));
        assert_eq!(*page.scrolls.borrow(), 1);
    }

    #[test]
    fn test_try_go_to_reports_missing_section() {
        let page = FakePage::with_sections();
        let navigator = SectionNavigator::new(&page);

        assert_eq!(
            navigator.try_go_to("nonexistent-id"),
            Err(NavigationError::NotFound("nonexistent-id".to_string()))
        );
        assert_eq!(page.top(), None);
    }

    #[test]
    fn test_go_to_is_repeatable() {
        let page = FakePage::with_sections();
        let navigator = SectionNavigator::new(&page);

        navigator.go_to("projects");
        navigator.go_to("projects");

        assert_eq!(*page.scrolls.borrow(), 2);
        assert_eq!(page.top().as_deref(), Some("projects"));
    }

    #[test]
    fn test_missing_document_is_silent() {
        let navigator = SectionNavigator::new(NoDocument);
        navigator.go_to("hero");
        assert_eq!(navigator.try_go_to("hero"), Err(NavigationError::NoDocument));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NavigationError::NotFound("x".into()).to_string(),
            "no element with id `x` is rendered"
        );
        assert_eq!(NavigationError::NoDocument.to_string(), "no document available");
    }
}
