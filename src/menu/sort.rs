//! Sort orderings for the alias menu.
//!
//! Both comparators are plain functions over two views. Direction is not
//! their concern: [`SortMode::compare`] flips the result when the reverse
//! flag is set.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::AliasView;
use crate::error::MenuError;

const REVERSE_PREFIX: &str = "reverse-";

/// Which key the menu is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Keep insertion order.
    Unsorted,
    #[default]
    Name,
    Address,
}

/// The `sort_alias` setting: a key plus a reverse flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortMode {
    pub key: SortKey,
    pub reverse: bool,
}

impl SortMode {
    pub const fn new(key: SortKey, reverse: bool) -> Self {
        Self { key, reverse }
    }

    pub const fn ascending(key: SortKey) -> Self {
        Self::new(key, false)
    }

    pub const fn descending(key: SortKey) -> Self {
        Self::new(key, true)
    }

    /// Comparator for the selected key, or `None` when insertion order is kept.
    pub fn comparator(&self) -> Option<fn(&AliasView, &AliasView) -> Ordering> {
        match self.key {
            SortKey::Unsorted => None,
            SortKey::Name => Some(compare_by_name),
            SortKey::Address => Some(compare_by_address),
        }
    }

    /// Compare two views under this mode, reverse flag applied.
    ///
    /// Returns `Equal` for [`SortKey::Unsorted`].
    pub fn compare(&self, a: &AliasView, b: &AliasView) -> Ordering {
        let ord = self.comparator().map_or(Ordering::Equal, |cmp| cmp(a, b));
        if self.reverse { ord.reverse() } else { ord }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.reverse {
            f.write_str(REVERSE_PREFIX)?;
        }
        f.write_str(match self.key {
            SortKey::Unsorted => "unsorted",
            SortKey::Name => "alias",
            SortKey::Address => "address",
        })
    }
}

impl FromStr for SortMode {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (reverse, rest) = match lower.strip_prefix(REVERSE_PREFIX) {
            Some(r) => (true, r),
            None => (false, lower.as_str()),
        };
        let key = match rest {
            "alias" | "name" => SortKey::Name,
            "address" => SortKey::Address,
            "unsorted" | "order" | "none" => SortKey::Unsorted,
            _ => return Err(MenuError::UnknownSortMode(s.trim().to_string())),
        };
        Ok(Self { key, reverse })
    }
}

/// ASCII case-insensitive byte-wise comparison.
pub fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// A present value orders before an absent one; two present values are
/// compared case-insensitively.
fn cmp_present_first(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_ignore_ascii_case(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order by alias name, ignoring ASCII case.
pub fn compare_by_name(a: &AliasView, b: &AliasView) -> Ordering {
    cmp_ignore_ascii_case(&a.alias.name, &b.alias.name)
}

/// Order by the first address of each alias.
///
/// An alias without addresses sorts first. Otherwise an address with a
/// personal name sorts before one without; two personal names are compared,
/// and failing both, the mailboxes.
pub fn compare_by_address(a: &AliasView, b: &AliasView) -> Ordering {
    let (addr_a, addr_b) = match (a.alias.first_address(), b.alias.first_address()) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (Some(x), Some(y)) => (x, y),
    };

    match (addr_a.personal.as_deref(), addr_b.personal.as_deref()) {
        (None, None) => cmp_present_first(addr_a.mailbox.as_deref(), addr_b.mailbox.as_deref()),
        (pa, pb) => cmp_present_first(pa, pb),
    }
}
