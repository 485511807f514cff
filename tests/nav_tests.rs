use edrs_portal::{
    nav::{all_links, dashboard_navigation},
    routes::PROTECTED_ROUTES,
};

fn paths(role: &str) -> Vec<&'static str> {
    dashboard_navigation(role, None)
        .iter()
        .flat_map(|section| section.links.iter().map(|link| link.path))
        .collect()
}

#[test]
fn test_navigation_hides_links_the_role_cannot_open() {
    let pm = paths("PM");
    assert!(pm.contains(&"/dashboard"));
    assert!(pm.contains(&"/edrs/upload"));
    assert!(!pm.contains(&"/engineer"));
    assert!(!pm.contains(&"/super-admin"));
}

#[test]
fn test_navigation_uses_guard_matching_rule() {
    assert!(paths("engineer").contains(&"/engineer"));
    assert!(paths("SA").contains(&"/super-admin"));
}

#[test]
fn test_empty_sections_are_dropped() {
    let sections = dashboard_navigation("PM", None);
    assert!(sections.iter().all(|section| section.id != "administration"));

    let sections = dashboard_navigation("SUPER_ADMIN", None);
    assert!(sections.iter().any(|section| section.id == "administration"));
}

#[test]
fn test_first_section_expanded_by_default() {
    let sections = dashboard_navigation("PM", None);
    assert!(sections[0].expanded);
    assert!(sections[1..].iter().all(|section| !section.expanded));
}

#[test]
fn test_open_expands_only_the_named_section() {
    let sections = dashboard_navigation("SA", Some("administration"));
    let expanded: Vec<_> = sections
        .iter()
        .filter(|section| section.expanded)
        .map(|section| section.id)
        .collect();
    assert_eq!(expanded, vec!["administration"]);
}

#[test]
fn test_unknown_open_falls_back_to_first_section() {
    let sections = dashboard_navigation("PM", Some("administration"));
    assert!(sections[0].expanded);
    assert_eq!(sections.iter().filter(|section| section.expanded).count(), 1);
}

#[test]
fn test_every_link_carries_its_route_guard() {
    for link in all_links() {
        let route = PROTECTED_ROUTES
            .iter()
            .find(|route| route.path == link.path)
            .unwrap_or_else(|| panic!("{} is not a protected route", link.path));
        assert_eq!(link.guard, route.guard(), "path {}", link.path);
    }
}

#[test]
fn test_every_protected_route_has_a_link() {
    let links = all_links();
    for route in PROTECTED_ROUTES {
        assert!(
            links.iter().any(|link| link.path == route.path),
            "no link for {}",
            route.path
        );
    }
}
