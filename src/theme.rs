use leptos::*;

/// Visual mode applied to the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Value written to the root element's `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Something that can present the page in a given theme.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

/// The document's `<html>` element.
///
/// Dark mode is signalled by the `dark` class (what the stylesheet keys its
/// palette on) and mirrored into `data-theme` for anything that prefers
/// attribute selectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            log::warn!("Portfolio: no document root, theme {} not applied", theme.as_str());
            return;
        };

        if root
            .class_list()
            .toggle_with_force("dark", theme.is_dark())
            .is_err()
        {
            log::warn!("Portfolio: could not update root class list");
        }
        if root.set_attribute("data-theme", theme.as_str()).is_err() {
            log::warn!("Portfolio: could not set data-theme on root");
        }
    }
}

/// Owns the page's theme state and keeps the rendering surface in step with it.
///
/// `Copy` so it can be moved into as many view closures as need it; the state
/// itself lives in the reactive runtime.
#[derive(Clone, Copy)]
pub struct ThemeController<S: ThemeSurface + Copy + 'static = DocumentRoot> {
    theme: RwSignal<Theme>,
    surface: S,
}

impl<S: ThemeSurface + Copy + 'static> ThemeController<S> {
    /// Start in the default theme and apply it right away so the first paint
    /// already uses the right palette.
    pub fn new(surface: S) -> Self {
        let initial = Theme::default();
        surface.apply(initial);
        Self {
            theme: create_rw_signal(initial),
            surface,
        }
    }

    /// Current theme. Tracked when read inside a reactive scope.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flip between light and dark.
    ///
    /// The surface is updated before subscribers are notified.
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.surface.apply(next);
        self.theme.set(next);
    }
}
