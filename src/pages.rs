//! Per-section page hooks selected by URL path.
//!
//! Section pages carry their own scripts; this only recognizes which section
//! is loaded and announces it, in the order below (first match wins).

#[cfg(test)]
#[path = "pages_test.rs"]
mod pages_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Checklists,
    Carpool,
    Meals,
}

impl Page {
    const ROUTES: [(&'static str, Page); 3] =
        [("/checklists", Page::Checklists), ("/carpool", Page::Carpool), ("/meals", Page::Meals)];

    /// Section for `path`; matches anywhere in the path.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ROUTES.iter().find(|(route, _)| path.contains(route)).map(|(_, page)| *page)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Checklists => "Checklist",
            Self::Carpool => "Carpool",
            Self::Meals => "Meal Planning",
        }
    }

    pub fn init(self) {
        log::info!("{} page initialized", self.title());
    }
}

/// Run the hook for `path`, if any. Returns the matched section.
pub fn init_for_path(path: &str) -> Option<Page> {
    let page = Page::from_path(path)?;
    page.init();
    Some(page)
}
