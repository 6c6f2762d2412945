//! The alias menu collection.
//!
//! [`AliasMenuData`] keeps one [`AliasView`] per alias shown in the selection
//! dialog. Adding and deleting leave the `num` fields stale; the controller
//! calls [`AliasMenuData::sort`] before reading them for display.

pub mod sort;

use std::rc::Rc;

use tracing::debug;

use crate::alias::Alias;
use crate::error::{MenuError, Result};
pub use sort::{SortKey, SortMode, compare_by_address, compare_by_name};

/// Display state for one alias in the menu.
#[derive(Clone, Debug)]
pub struct AliasView {
    /// Position in the menu, valid only after the last sort.
    pub num: usize,
    /// Multi-select marker, owned by the dialog controller.
    pub is_tagged: bool,
    /// Soft-delete marker, owned by the dialog controller.
    pub is_deleted: bool,
    pub alias: Rc<Alias>,
}

impl AliasView {
    /// Wrap `alias` with cleared markers and a `num` of zero.
    pub fn new(alias: Rc<Alias>) -> Self {
        Self {
            num: 0,
            is_tagged: false,
            is_deleted: false,
            alias,
        }
    }

    /// Whether this view wraps exactly `alias` (identity, not contents).
    pub fn wraps(&self, alias: &Rc<Alias>) -> bool {
        Rc::ptr_eq(&self.alias, alias)
    }
}

/// Ordered collection of alias views backing the menu.
#[derive(Clone, Debug, Default)]
pub struct AliasMenuData {
    views: Vec<AliasView>,
}

impl AliasMenuData {
    /// Create an empty menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty menu with room for `capacity` views.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            views: Vec::with_capacity(capacity),
        }
    }

    /// Append a fresh view for `alias` and return the new size.
    ///
    /// The menu is not re-sorted; call [`sort`](Self::sort) before reading
    /// `num` values again.
    ///
    /// # Arguments
    ///
    /// * `alias` - The alias to list; shared with the address book.
    pub fn add(&mut self, alias: Rc<Alias>) -> usize {
        self.views.push(AliasView::new(alias));
        debug!(size = self.views.len(), "alias added to menu");
        self.views.len()
    }

    /// Remove the first view wrapping `alias` and return the resulting size.
    ///
    /// An alias that is not in the menu is ignored. Matching is by identity,
    /// so an equal but distinct alias is never removed.
    ///
    /// # Arguments
    ///
    /// * `alias` - The alias to remove, as previously passed to [`add`](Self::add).
    pub fn delete(&mut self, alias: &Rc<Alias>) -> usize {
        if let Some(idx) = self.position_of(alias) {
            self.views.remove(idx);
            debug!(position = idx, size = self.views.len(), "alias removed from menu");
        }
        self.views.len()
    }

    /// Reorder according to `mode`, then renumber every view by position.
    ///
    /// With [`SortKey::Unsorted`] the current order is kept and only the
    /// renumbering runs. Afterwards `num` equals the position of every view.
    ///
    /// # Arguments
    ///
    /// * `mode` - Sort key and direction, usually the `sort_alias` setting.
    pub fn sort(&mut self, mode: SortMode) {
        if mode.comparator().is_some() {
            // `sort_by` is stable, so ties keep their current relative order.
            self.views.sort_by(|a, b| mode.compare(a, b));
        }
        self.reindex();
        debug!(%mode, size = self.views.len(), "alias menu sorted");
    }

    fn reindex(&mut self) {
        for (i, view) in self.views.iter_mut().enumerate() {
            view.num = i;
        }
    }

    /// Position of the first view wrapping `alias`, if any.
    pub fn position_of(&self, alias: &Rc<Alias>) -> Option<usize> {
        self.views.iter().position(|v| v.wraps(alias))
    }

    /// Number of views in the menu.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Whether the menu holds no views.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// View at `position` in the current order.
    pub fn get(&self, position: usize) -> Option<&AliasView> {
        self.views.get(position)
    }

    /// Mutable view at `position`, for setting markers.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut AliasView> {
        self.views.get_mut(position)
    }

    /// Iterate over the views in menu order.
    pub fn iter(&self) -> std::slice::Iter<'_, AliasView> {
        self.views.iter()
    }

    /// Mutable access for the controller's tag/delete markers.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, AliasView> {
        self.views.iter_mut()
    }

    /// The views in menu order as a slice.
    pub fn as_slice(&self) -> &[AliasView] {
        &self.views
    }

    /// Views the controller has tagged, in menu order.
    pub fn tagged(&self) -> impl Iterator<Item = &AliasView> {
        self.views.iter().filter(|v| v.is_tagged)
    }

    /// Drop every view, e.g. when the dialog is reset.
    pub fn clear(&mut self) {
        self.views.clear();
    }
}

impl FromIterator<Rc<Alias>> for AliasMenuData {
    fn from_iter<I: IntoIterator<Item = Rc<Alias>>>(iter: I) -> Self {
        let mut menu = Self::new();
        for alias in iter {
            menu.add(alias);
        }
        menu
    }
}

impl<'a> IntoIterator for &'a AliasMenuData {
    type Item = &'a AliasView;
    type IntoIter = std::slice::Iter<'a, AliasView>;

    fn into_iter(self) -> Self::IntoIter {
        self.views.iter()
    }
}

/// Controller entry point for [`AliasMenuData::add`].
///
/// The dialog may not have a menu open, or may have no alias selected;
/// either case fails with [`MenuError::InvalidArgument`] and changes nothing.
pub fn add_to(menu: Option<&mut AliasMenuData>, alias: Option<Rc<Alias>>) -> Result<usize> {
    let menu = menu.ok_or(MenuError::InvalidArgument("no alias menu"))?;
    let alias = alias.ok_or(MenuError::InvalidArgument("no alias"))?;
    Ok(menu.add(alias))
}

/// Controller entry point for [`AliasMenuData::delete`].
///
/// Fails with [`MenuError::InvalidArgument`] when either argument is absent.
/// An alias that is not listed is not an error.
pub fn delete_from(menu: Option<&mut AliasMenuData>, alias: Option<&Rc<Alias>>) -> Result<usize> {
    let menu = menu.ok_or(MenuError::InvalidArgument("no alias menu"))?;
    let alias = alias.ok_or(MenuError::InvalidArgument("no alias"))?;
    Ok(menu.delete(alias))
}
