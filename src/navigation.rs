//! View navigation for the discovery surface.
//!
//! Home, Search and Popular are tabs. Updates and Detail are reached only by
//! explicit navigation and `back` from either returns to the last active tab.
//! Navigation never touches the catalog.

use crate::catalog::{CatalogEntry, EntryId};
use crate::catalog_store::CatalogStore;
use clap::ValueEnum;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Tab {
    #[default]
    Home,
    Search,
    Popular,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Search,
    Popular,
    Updates,
    Detail,
}

impl From<Tab> for View {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Home => View::Home,
            Tab::Search => View::Search,
            Tab::Popular => View::Popular,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Home => "Home",
            View::Search => "Search",
            View::Popular => "Popular",
            View::Updates => "Updates",
            View::Detail => "Detail",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    active_tab: Tab,
    current: View,
    selected: Option<EntryId>,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator {
            active_tab: Tab::Home,
            current: View::Home,
            selected: None,
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn current_view(&self) -> View {
        self.current
    }

    pub fn selected_id(&self) -> Option<EntryId> {
        self.selected
    }

    /// The tab bar is hidden while an entry or the update feed is shown.
    pub fn tab_bar_visible(&self) -> bool {
        !matches!(self.current, View::Detail | View::Updates)
    }

    pub fn change_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.current = tab.into();
    }

    pub fn select_entry(&mut self, id: EntryId) {
        self.selected = Some(id);
        self.current = View::Detail;
    }

    /// "See all" on the home popular carousel.
    pub fn show_popular(&mut self) {
        self.change_tab(Tab::Popular);
    }

    /// "See all" on the home updates carousel. The active tab is kept.
    pub fn show_updates(&mut self) {
        self.current = View::Updates;
    }

    /// Returns whether the view changed.
    pub fn back(&mut self) -> bool {
        match self.current {
            View::Detail | View::Updates => {
                self.current = self.active_tab.into();
                true
            }
            View::Home | View::Search | View::Popular => false,
        }
    }

    /// Resolve the selected entry against the current catalog. Gives `None`
    /// once the entry has been deleted.
    pub fn selected_entry<'a, S: CatalogStore + ?Sized>(
        &self,
        store: &'a S,
    ) -> Option<&'a CatalogEntry> {
        self.selected.and_then(|id| store.get_by_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SeedSet;
    use crate::catalog_store::InMemoryCatalogStore;

    #[test]
    fn starts_on_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current_view(), View::Home);
        assert_eq!(nav.active_tab(), Tab::Home);
        assert!(nav.tab_bar_visible());
        assert_eq!(nav.selected_id(), None);
    }

    #[test]
    fn detail_returns_to_active_tab() {
        let mut nav = Navigator::new();
        nav.change_tab(Tab::Search);
        nav.select_entry(EntryId(3));
        assert_eq!(nav.current_view(), View::Detail);
        assert!(!nav.tab_bar_visible());

        assert!(nav.back());
        assert_eq!(nav.current_view(), View::Search);
        assert!(nav.tab_bar_visible());
    }

    #[test]
    fn show_popular_switches_tab() {
        let mut nav = Navigator::new();
        nav.show_popular();
        assert_eq!(nav.active_tab(), Tab::Popular);
        assert_eq!(nav.current_view(), View::Popular);
    }

    #[test]
    fn updates_back_to_last_tab() {
        let mut nav = Navigator::new();
        nav.show_updates();
        assert_eq!(nav.current_view(), View::Updates);
        assert_eq!(nav.active_tab(), Tab::Home);
        assert!(!nav.tab_bar_visible());

        nav.select_entry(EntryId(1));
        assert!(nav.back());
        // Detail goes back to the tab, not to the update feed.
        assert_eq!(nav.current_view(), View::Home);
    }

    #[test]
    fn back_on_tab_is_noop() {
        let mut nav = Navigator::new();
        nav.change_tab(Tab::Popular);
        assert!(!nav.back());
        assert_eq!(nav.current_view(), View::Popular);
    }

    #[test]
    fn selected_entry_follows_store() {
        let mut store = InMemoryCatalogStore::from_seed(SeedSet::Discovery).unwrap();
        let mut nav = Navigator::new();
        nav.select_entry(EntryId(2));
        assert_eq!(
            nav.selected_entry(&store).map(|e| e.title.as_str()),
            Some("Azure Legends")
        );

        store.delete(EntryId(2)).unwrap();
        assert!(nav.selected_entry(&store).is_none());
    }
}
