// Unit tests for alias-menu
// These tests work against the public API only

#[cfg(test)]
mod menu_tests {
    use alias_menu::{Address, Alias, AliasMenuData, SortKey, SortMode};
    use std::rc::Rc;

    const ALL_MODES: [SortMode; 6] = [
        SortMode::ascending(SortKey::Unsorted),
        SortMode::descending(SortKey::Unsorted),
        SortMode::ascending(SortKey::Name),
        SortMode::descending(SortKey::Name),
        SortMode::ascending(SortKey::Address),
        SortMode::descending(SortKey::Address),
    ];

    /// One alias per address-ordering case, with no two comparing equal.
    fn address_samples() -> Vec<Rc<Alias>> {
        vec![
            Rc::new(Alias::new("a").address(Address::new("mail@example.org"))),
            Rc::new(Alias::new("b").address(Address::with_personal("Zoe", "z@example.org"))),
            Rc::new(Alias::new("c")),
            Rc::new(Alias::new("d").address(Address {
                personal: Some("Dee".into()),
                mailbox: None,
            })),
            Rc::new(Alias::new("e").address(Address::default())),
        ]
    }

    fn names(menu: &AliasMenuData) -> Vec<String> {
        menu.iter().map(|v| v.alias.name.clone()).collect()
    }

    fn assert_indexed(menu: &AliasMenuData) {
        for (i, v) in menu.iter().enumerate() {
            assert_eq!(v.num, i, "view {} has num {}", v.alias.name, v.num);
        }
    }

    #[test]
    fn test_add_grows_by_one_and_appends() {
        let mut menu = AliasMenuData::new();
        for (n, name) in ["x", "y", "z"].iter().enumerate() {
            let before = menu.len();
            let size = menu.add(Rc::new(Alias::new(*name)));
            assert_eq!(size, before + 1);
            assert_eq!(size, n + 1);
            let last = menu.get(size - 1).unwrap();
            assert_eq!(last.alias.name, *name);
            assert_eq!(last.num, 0);
        }
    }

    #[test]
    fn test_index_invariant_for_every_mode() {
        for mode in ALL_MODES {
            let mut menu: AliasMenuData = ["delta", "Alpha", "charlie", "bravo"]
                .into_iter()
                .map(|n| Rc::new(Alias::new(n)))
                .collect();
            menu.sort(mode);
            assert_indexed(&menu);
        }
    }

    #[test]
    fn test_sort_is_idempotent_for_every_mode() {
        for mode in ALL_MODES {
            let mut menu: AliasMenuData = address_samples().into_iter().collect();
            menu.add(Rc::new(Alias::new("Alpha")));
            menu.add(Rc::new(Alias::new("alpha")));
            menu.sort(mode);
            let first: Vec<_> = menu.iter().map(|v| (v.alias.name.clone(), v.num)).collect();
            menu.sort(mode);
            let second: Vec<_> = menu.iter().map(|v| (v.alias.name.clone(), v.num)).collect();
            assert_eq!(first, second, "{mode}");
        }
    }

    #[test]
    fn test_name_scenario_ascending_then_descending() {
        let mut menu = AliasMenuData::new();
        menu.add(Rc::new(Alias::new("Bob")));
        menu.add(Rc::new(Alias::new("alice")));

        menu.sort(SortMode::ascending(SortKey::Name));
        assert_eq!(names(&menu), ["alice", "Bob"]);
        assert_eq!(menu.iter().map(|v| v.num).collect::<Vec<_>>(), [0, 1]);

        menu.sort(SortMode::descending(SortKey::Name));
        assert_eq!(names(&menu), ["Bob", "alice"]);
        assert_eq!(menu.iter().map(|v| v.num).collect::<Vec<_>>(), [0, 1]);
    }

    #[test]
    fn test_reverse_is_exact_reverse_without_ties() {
        let aliases: Vec<_> = ["mike", "Juliet", "kilo", "echo", "Lima"]
            .into_iter()
            .map(|n| Rc::new(Alias::new(n)))
            .collect();

        let mut asc: AliasMenuData = aliases.iter().cloned().collect();
        asc.sort(SortMode::ascending(SortKey::Name));
        let mut desc: AliasMenuData = aliases.iter().cloned().collect();
        desc.sort(SortMode::descending(SortKey::Name));

        let mut reversed = names(&asc);
        reversed.reverse();
        assert_eq!(names(&desc), reversed);
    }

    #[test]
    fn test_reverse_is_exact_reverse_by_address() {
        let aliases = address_samples();

        let mut asc: AliasMenuData = aliases.iter().cloned().collect();
        asc.sort(SortMode::ascending(SortKey::Address));
        assert_eq!(names(&asc), ["c", "d", "b", "a", "e"]);

        let mut desc: AliasMenuData = aliases.iter().cloned().collect();
        desc.sort(SortMode::descending(SortKey::Address));
        assert_eq!(names(&desc), ["e", "a", "b", "d", "c"]);
    }

    #[test]
    fn test_delete_by_identity_not_value() {
        let sam1 = Rc::new(Alias::new("Sam"));
        let sam2 = Rc::new(Alias::new("Sam"));
        assert_eq!(*sam1, *sam2);

        let mut menu = AliasMenuData::new();
        menu.add(sam1.clone());
        menu.add(sam2.clone());

        assert_eq!(menu.delete(&sam1), 1);
        assert!(menu.position_of(&sam1).is_none());
        assert_eq!(menu.position_of(&sam2), Some(0));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut menu: AliasMenuData = ["a", "b"]
            .into_iter()
            .map(|n| Rc::new(Alias::new(n)))
            .collect();
        menu.sort(SortMode::ascending(SortKey::Unsorted));
        let stranger = Rc::new(Alias::new("a"));

        assert_eq!(menu.delete(&stranger), 2);
        assert_eq!(names(&menu), ["a", "b"]);
        assert_indexed(&menu);
    }

    #[test]
    fn test_markers_survive_sort_and_delete() {
        let keep = Rc::new(Alias::new("zulu"));
        let gone = Rc::new(Alias::new("alpha"));
        let mut menu = AliasMenuData::new();
        menu.add(keep.clone());
        menu.add(gone.clone());
        menu.add(Rc::new(Alias::new("mike")));

        menu.get_mut(0).unwrap().is_tagged = true;
        menu.get_mut(2).unwrap().is_deleted = true;

        menu.sort(SortMode::ascending(SortKey::Name));
        menu.delete(&gone);
        menu.sort(SortMode::ascending(SortKey::Name));

        assert_eq!(names(&menu), ["mike", "zulu"]);
        assert!(menu.get(0).unwrap().is_deleted);
        assert!(menu.get(1).unwrap().is_tagged);
        let tagged: Vec<_> = menu.tagged().map(|v| v.alias.name.as_str()).collect();
        assert_eq!(tagged, ["zulu"]);
    }

    #[test]
    fn test_clear_empties_menu() {
        let mut menu: AliasMenuData = ["a"].into_iter().map(|n| Rc::new(Alias::new(n))).collect();
        menu.clear();
        assert!(menu.is_empty());
        menu.sort(SortMode::default());
        assert!(menu.as_slice().is_empty());
    }
}

#[cfg(test)]
mod comparator_tests {
    use alias_menu::menu::{compare_by_address, compare_by_name};
    use alias_menu::{Address, Alias, AliasView};
    use std::cmp::Ordering;
    use std::rc::Rc;

    fn samples() -> Vec<AliasView> {
        let aliases = vec![
            Alias::new("none"),
            Alias::new("Ann").address(Address::with_personal("Ann Smith", "ann@example.org")),
            Alias::new("ann").address(Address::with_personal("ann smith", "other@example.org")),
            Alias::new("bo").address(Address::new("BO@example.org")),
            Alias::new("cy").address(Address::new("cy@example.org")),
            Alias::new("dee").address(Address {
                personal: Some("Dee".into()),
                mailbox: None,
            }),
            Alias::new("broken").address(Address::default()),
        ];
        aliases.into_iter().map(|a| AliasView::new(Rc::new(a))).collect()
    }

    fn check_antisymmetric(cmp: fn(&AliasView, &AliasView) -> Ordering) {
        let views = samples();
        for a in &views {
            for b in &views {
                assert_eq!(
                    cmp(a, b),
                    cmp(b, a).reverse(),
                    "{} vs {}",
                    a.alias.name,
                    b.alias.name
                );
            }
        }
    }

    #[test]
    fn test_name_comparator_antisymmetric() {
        check_antisymmetric(compare_by_name);
    }

    #[test]
    fn test_address_comparator_antisymmetric() {
        check_antisymmetric(compare_by_address);
    }

    #[test]
    fn test_name_comparator_ignores_case() {
        let views = samples();
        assert_eq!(compare_by_name(&views[1], &views[2]), Ordering::Equal);
        assert_eq!(compare_by_name(&views[1], &views[3]), Ordering::Less);
    }

    #[test]
    fn test_address_comparator_personal_names_ignore_case() {
        let views = samples();
        assert_eq!(compare_by_address(&views[1], &views[2]), Ordering::Equal);
        assert_eq!(compare_by_address(&views[5], &views[1]), Ordering::Greater);
        assert_eq!(compare_by_address(&views[3], &views[4]), Ordering::Less);
        assert_eq!(compare_by_address(&views[4], &views[6]), Ordering::Less);
    }
}

#[cfg(test)]
mod search_tests {
    use alias_menu::search::matching_positions;
    use alias_menu::{Address, Alias, AliasMenuData, SortKey, SortMode};
    use std::rc::Rc;

    #[test]
    fn test_search_follows_sorted_order() {
        let mut menu: AliasMenuData = [
            Alias::new("zed").address(Address::new("zed@example.org")),
            Alias::new("amy").address(Address::new("amy@example.org")),
            Alias::new("kim").address(Address::new("kim@elsewhere.net")),
        ]
        .into_iter()
        .map(Rc::new)
        .collect();
        menu.sort(SortMode::ascending(SortKey::Name));

        let hits = matching_positions(&menu, "EXAMPLE");
        let names: Vec<_> = hits
            .iter()
            .map(|&i| menu.get(i).unwrap().alias.name.as_str())
            .collect();
        assert_eq!(names, ["amy", "zed"]);
    }
}
