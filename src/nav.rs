//! Collapsible dashboard navigation.

use serde::Deserialize;

use crate::{
    guard::RouteGuard,
    routes::{
        DASHBOARD, EDRS_DOCUMENTS, EDRS_INSIGHTS, EDRS_UPLOAD, ENGINEER, ProtectedRoute,
        SUPER_ADMIN,
    },
};

/// NavLink
///
/// One sidebar entry. `guard` comes from the same `ProtectedRoute` the target
/// route is mounted with, so a link is only listed when following it would
/// render the view.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub guard: RouteGuard,
}

/// NavSection
#[derive(Debug, Clone)]
pub struct NavSection {
    pub id: &'static str,
    pub title: &'static str,
    pub links: Vec<NavLink>,
    pub expanded: bool,
}

/// NavQuery
///
/// `?open=<section id>` expands one section and collapses the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavQuery {
    pub open: Option<String>,
}

fn link(label: &'static str, route: ProtectedRoute) -> NavLink {
    NavLink {
        label,
        path: route.path,
        guard: route.guard(),
    }
}

fn full_navigation() -> Vec<NavSection> {
    vec![
        NavSection {
            id: "overview",
            title: "Overview",
            links: vec![
                link("Dashboard", DASHBOARD),
                link("Engineer workspace", ENGINEER),
            ],
            expanded: false,
        },
        NavSection {
            id: "edrs",
            title: "EDRS",
            links: vec![
                link("Upload documents", EDRS_UPLOAD),
                link("Document register", EDRS_DOCUMENTS),
                link("AI insights", EDRS_INSIGHTS),
            ],
            expanded: false,
        },
        NavSection {
            id: "administration",
            title: "Administration",
            links: vec![link("Super-admin console", SUPER_ADMIN)],
            expanded: false,
        },
    ]
}

/// Every link the sidebar can show, before role filtering.
pub fn all_links() -> Vec<NavLink> {
    full_navigation()
        .into_iter()
        .flat_map(|section| section.links)
        .collect()
}

/// dashboard_navigation
///
/// Sidebar for a session holding `role_code`. Links the role cannot open are
/// dropped, then empty sections. The section named by `open` is expanded; with
/// no (or an unknown) `open`, the first section is.
pub fn dashboard_navigation(role_code: &str, open: Option<&str>) -> Vec<NavSection> {
    let mut sections: Vec<NavSection> = full_navigation()
        .into_iter()
        .filter_map(|mut section| {
            section.links.retain(|link| link.guard.admits_role(role_code));
            (!section.links.is_empty()).then_some(section)
        })
        .collect();

    let open_index = open
        .and_then(|id| sections.iter().position(|section| section.id == id))
        .unwrap_or(0);
    for (index, section) in sections.iter_mut().enumerate() {
        section.expanded = index == open_index;
    }
    sections
}
