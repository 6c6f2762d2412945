use crate::alias::Alias;
use crate::menu::AliasMenuData;

fn alias_matches(alias: &Alias, q: &str) -> bool {
    alias.name.to_ascii_lowercase().contains(q)
        || alias.comment.as_deref().unwrap_or("").to_ascii_lowercase().contains(q)
        || alias.addresses.iter().any(|a| {
            a.personal.as_deref().unwrap_or("").to_ascii_lowercase().contains(q)
                || a.mailbox.as_deref().unwrap_or("").to_ascii_lowercase().contains(q)
        })
}

/// Positions of the views matching `query`, in menu order.
///
/// An empty query matches everything.
pub fn matching_positions(menu: &AliasMenuData, query: &str) -> Vec<usize> {
    let q = query.trim().to_ascii_lowercase();
    menu.iter()
        .enumerate()
        .filter(|(_, v)| q.is_empty() || alias_matches(&v.alias, &q))
        .map(|(i, _)| i)
        .collect()
}
