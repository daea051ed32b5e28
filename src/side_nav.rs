//! Floating side navigation bar.
//!
//! The bar decides which entry is active for the current location, whether a
//! click moves within the page (offset-corrected smooth scroll) or performs a
//! full route change, and which entry is currently showing its hover tooltip.
//! On the projects list page it doubles as a category filter that signals the
//! parent's callback instead of owning any selection state.
//!
//! All navigation decisions are pure functions over the `Location` snapshot;
//! the rendering code only wires them to egui responses.

use crate::router::Location;
use crate::scroll::ScrollHost;
use crate::theme::ThemeColors;
use egui::{
    Align2, Color32, Context, FontId, Id, Margin, Pos2, RichText, Rounding, Sense, Stroke, Vec2,
};

/// Vertical correction subtracted from anchored-scroll targets, accounting
/// for the fixed header overlapping the viewport top.
pub const HEADER_OFFSET: f32 = 200.0;

/// The projects list route, where category filters take over the bar.
pub const PROJECTS_ROUTE: &str = "/projects";

const ENTRY_SECS: f32 = 0.5;
const TOOLTIP_SECS: f32 = 0.2;
const TOOLTIP_GAP: f32 = 16.0;
const TOOLTIP_SLIDE: f32 = 10.0;
const BUTTON_DIAMETER: f32 = 44.0;

/// A navigable entry. `path` may embed a `#fragment` pointing at a section
/// of the target page. Identity is the path string; the tables below are
/// plain configuration data and are never mutated.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub path: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// A project category button shown on the projects list page.
#[derive(Debug, Clone, Copy)]
pub struct CategoryItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// General entries shown outside project pages. The portfolio currently
/// drives all top-level navigation from the header, so this table is empty.
pub const MAIN_NAV_ITEMS: &[NavItem] = &[];

/// Section entries for the Guardian case study.
pub const PROJECT_NAV_ITEMS: &[NavItem] = &[
    NavItem {
        path: "/projects/guardian#overview",
        icon: "👁",
        label: "Project Overview",
    },
    NavItem {
        path: "/projects/guardian#problem",
        icon: "⚠",
        label: "The Problem",
    },
    NavItem {
        path: "/projects/guardian#research-discovery",
        icon: "🔍",
        label: "Research And Discovery",
    },
    NavItem {
        path: "/projects/guardian#design-goals",
        icon: "🎯",
        label: "Design Goals",
    },
    NavItem {
        path: "/projects/guardian#key-features",
        icon: "📋",
        label: "Key Features",
    },
    NavItem {
        path: "/projects/guardian#user-feedback",
        icon: "💬",
        label: "User Feedback & Iterations",
    },
    NavItem {
        path: "/projects/guardian#design-system",
        icon: "🎨",
        label: "Design System",
    },
    NavItem {
        path: "/projects/guardian#reflection",
        icon: "🚀",
        label: "Reflection",
    },
];

pub const PROJECT_CATEGORY_ITEMS: &[CategoryItem] = &[
    CategoryItem {
        id: "all",
        icon: "▦",
        label: "All Projects",
    },
    CategoryItem {
        id: "design",
        icon: "🖌",
        label: "UX/UI Design",
    },
    CategoryItem {
        id: "coding",
        icon: "💻",
        label: "Development",
    },
];

/// The "Back to Projects" entry appended below a divider on project pages.
pub const BACK_ITEM: NavItem = NavItem {
    path: "/projects",
    icon: "▦",
    label: "Back to Projects",
};

/// What the bar renders for a given pathname, computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Marketing pages carry their own navigation; the bar stays away.
    Hidden,
    /// A project case study: section links plus the back entry.
    ProjectDetail,
    /// Everything else: the general item list.
    Default,
}

pub fn render_mode(pathname: &str) -> RenderMode {
    if pathname == "/" || pathname == "/about" {
        RenderMode::Hidden
    } else if pathname.starts_with("/projects/") {
        RenderMode::ProjectDetail
    } else {
        RenderMode::Default
    }
}

/// The item list shown for a render mode.
pub fn nav_items(mode: RenderMode) -> &'static [NavItem] {
    match mode {
        RenderMode::Hidden => &[],
        RenderMode::ProjectDetail => PROJECT_NAV_ITEMS,
        RenderMode::Default => MAIN_NAV_ITEMS,
    }
}

/// Category buttons appear only on the projects list page and only when the
/// parent supplied a selection callback.
pub fn categories_visible(pathname: &str, filter_supplied: bool) -> bool {
    pathname == PROJECTS_ROUTE && filter_supplied
}

/// Split an item path into its route and optional fragment on the first `#`.
/// A path with no route segment before the `#` is a route-only item.
fn split_route(path: &str) -> (&str, Option<&str>) {
    match path.split_once('#') {
        Some((route, frag)) if !route.is_empty() && !frag.is_empty() => (route, Some(frag)),
        _ => (path, None),
    }
}

/// Whether the entry at `path` is highlighted for the current location.
///
/// Three-tier policy: the root item matches `/` exactly; fragment-bearing
/// items match route and hash exactly (several items share a route and
/// differ only by section); route-only items prefix-match so a parent route
/// stays highlighted on nested pages.
pub fn is_active(path: &str, location: &Location) -> bool {
    if path == "/" {
        return location.pathname == "/";
    }
    let (route, fragment) = split_route(path);
    match fragment {
        Some(frag) => location.pathname == route && location.hash.strip_prefix('#') == Some(frag),
        None => location.pathname.starts_with(route),
    }
}

/// A full route change the shell should apply on the bar's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    Goto(String),
}

/// Offset-corrected scroll target for an anchored section: the element's
/// viewport-relative top plus the current scroll offset, minus the fixed
/// header overlap.
pub fn anchor_scroll_target(element_top: f32, scroll_offset: f32) -> f32 {
    element_top + scroll_offset - HEADER_OFFSET
}

/// Resolve a click on the entry at `path`.
///
/// Same-page fragment clicks are intercepted: the page must not re-run a
/// route change (that would lose scroll position), so the host scrolls to
/// the section instead. A fragment whose section is not mounted yet is a
/// silent no-op. Cross-page clicks, with or without fragment, fall through
/// to an ordinary route change.
pub fn handle_nav_click(
    path: &str,
    location: &Location,
    host: &mut dyn ScrollHost,
) -> Option<NavRequest> {
    let (route, fragment) = split_route(path);
    if let Some(frag) = fragment {
        if location.pathname == route {
            if let Some(top) = host.anchor_top(frag) {
                host.scroll_to(anchor_scroll_target(top, host.scroll_offset()));
            }
            return None;
        }
    }
    Some(NavRequest::Goto(path.to_string()))
}

/// Identifies the single entry currently showing its tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverKey {
    Item(usize),
    Category(usize),
    Back,
}

/// Tracks at most one hovered entry. Setting a new key replaces the previous
/// one, so two tooltips can never be visible at once.
#[derive(Debug, Default)]
pub struct HoverState {
    current: Option<HoverKey>,
}

impl HoverState {
    pub fn set(&mut self, key: HoverKey) {
        self.current = Some(key);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_hovered(&self, key: HoverKey) -> bool {
        self.current == Some(key)
    }

    pub fn current(&self) -> Option<HoverKey> {
        self.current
    }
}

/// Capability handed in by the parent view when the project list should be
/// filterable. The parent owns the selected id; the bar only compares it
/// against each category and signals the chosen id back.
pub struct CategoryFilter<'a> {
    pub selected: Option<&'a str>,
    pub on_select: &'a mut dyn FnMut(&str),
}

/// The floating bar itself. Owns nothing but the hover state.
#[derive(Default)]
pub struct SideNav {
    hover: HoverState,
}

impl SideNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Render the bar for the current location. Returns a route change to
    /// apply, if a click requested one.
    pub fn show(
        &mut self,
        ctx: &Context,
        location: &Location,
        mut categories: Option<CategoryFilter<'_>>,
        host: &mut dyn ScrollHost,
        dark_mode: bool,
    ) -> Option<NavRequest> {
        let mode = render_mode(&location.pathname);
        if mode == RenderMode::Hidden {
            // Re-arm the slide-in for the next time the bar appears.
            ctx.animate_bool_with_time(Id::new("side_nav_entry"), false, 0.0);
            return None;
        }

        let colors = ThemeColors::current(dark_mode);
        let entry = ctx.animate_bool_with_time(Id::new("side_nav_entry"), true, ENTRY_SECS);
        let slide_x = -(1.0 - entry) * 100.0;
        let mut request = None;

        egui::Area::new(Id::new("side_nav"))
            .anchor(Align2::LEFT_CENTER, egui::vec2(24.0 + slide_x, 0.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(colors.nav_bg.gamma_multiply(entry))
                    .stroke(Stroke::new(1.0, colors.nav_border.gamma_multiply(entry)))
                    .rounding(Rounding::same(BUTTON_DIAMETER / 2.0 + 8.0))
                    .inner_margin(Margin::symmetric(8.0, 14.0))
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(0.0, 8.0);

                        if categories_visible(&location.pathname, categories.is_some()) {
                            if let Some(filter) = categories.as_mut() {
                                for (index, item) in PROJECT_CATEGORY_ITEMS.iter().enumerate() {
                                    let active = filter.selected == Some(item.id);
                                    let resp = self.icon_button(
                                        ui,
                                        colors,
                                        HoverKey::Category(index),
                                        item.icon,
                                        item.label,
                                        active,
                                        entry,
                                    );
                                    if resp.clicked() {
                                        (filter.on_select)(item.id);
                                    }
                                }
                            }
                        }

                        for (index, item) in nav_items(mode).iter().enumerate() {
                            let active = is_active(item.path, location);
                            let resp = self.icon_button(
                                ui,
                                colors,
                                HoverKey::Item(index),
                                item.icon,
                                item.label,
                                active,
                                entry,
                            );
                            if resp.clicked() {
                                if let Some(req) = handle_nav_click(item.path, location, host) {
                                    request = Some(req);
                                }
                            }
                        }

                        if mode == RenderMode::ProjectDetail {
                            self.divider(ui, colors, entry);
                            let resp = self.icon_button(
                                ui,
                                colors,
                                HoverKey::Back,
                                BACK_ITEM.icon,
                                BACK_ITEM.label,
                                false,
                                entry,
                            );
                            if resp.clicked() {
                                request = Some(NavRequest::Goto(BACK_ITEM.path.to_string()));
                            }
                        }
                    });
            });

        request
    }

    /// One round entry button with its hover tooltip. Pointer enter sets the
    /// hover key, pointer leave clears it.
    fn icon_button(
        &mut self,
        ui: &mut egui::Ui,
        colors: &ThemeColors,
        key: HoverKey,
        icon: &str,
        label: &str,
        active: bool,
        alpha: f32,
    ) -> egui::Response {
        let (rect, resp) = ui.allocate_exact_size(Vec2::splat(BUTTON_DIAMETER), Sense::click());

        if resp.hovered() {
            self.hover.set(key);
        } else if self.hover.is_hovered(key) {
            self.hover.clear();
        }

        let bg = if active {
            colors.nav_active_bg
        } else if resp.hovered() {
            colors.nav_hover_bg
        } else {
            Color32::TRANSPARENT
        };
        if bg != Color32::TRANSPARENT {
            ui.painter()
                .circle_filled(rect.center(), BUTTON_DIAMETER / 2.0, bg.gamma_multiply(alpha));
        }
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            icon,
            FontId::proportional(20.0),
            colors.nav_icon.gamma_multiply(alpha),
        );

        self.tooltip(ui.ctx(), rect, key, label, colors);
        resp
    }

    /// Label overlay for a hovered entry. Enters from a fixed horizontal
    /// offset at zero opacity and settles fully opaque; exit reverses. The
    /// animation itself belongs to egui; this only decides presence.
    fn tooltip(
        &self,
        ctx: &Context,
        anchor_rect: egui::Rect,
        key: HoverKey,
        label: &str,
        colors: &ThemeColors,
    ) {
        let t = ctx.animate_bool_with_time(tooltip_id(key), self.hover.is_hovered(key), TOOLTIP_SECS);
        if t <= 0.0 {
            return;
        }
        let pos = Pos2::new(
            anchor_rect.right() + TOOLTIP_GAP - TOOLTIP_SLIDE * (1.0 - t),
            anchor_rect.center().y - 14.0,
        );
        egui::Area::new(tooltip_id(key).with("overlay"))
            .order(egui::Order::Tooltip)
            .fixed_pos(pos)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(colors.tooltip_bg.gamma_multiply(t))
                    .rounding(Rounding::same(6.0))
                    .inner_margin(Margin::symmetric(10.0, 6.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(label)
                                .size(13.0)
                                .color(colors.tooltip_text.gamma_multiply(t)),
                        );
                    });
            });
    }

    fn divider(&self, ui: &mut egui::Ui, colors: &ThemeColors, alpha: f32) {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(BUTTON_DIAMETER, 1.0), Sense::hover());
        ui.painter()
            .rect_filled(rect, 0.0, colors.divider.gamma_multiply(alpha));
    }
}

fn tooltip_id(key: HoverKey) -> Id {
    Id::new(("side_nav_tooltip", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn loc(pathname: &str, hash: &str) -> Location {
        Location {
            pathname: pathname.to_string(),
            hash: hash.to_string(),
        }
    }

    /// Stand-in for the page: scripted anchors, recorded scroll calls.
    #[derive(Default)]
    struct FakeHost {
        anchors: HashMap<String, f32>,
        offset: f32,
        scrolled_to: Vec<f32>,
    }

    impl ScrollHost for FakeHost {
        fn anchor_top(&self, id: &str) -> Option<f32> {
            self.anchors.get(id).copied()
        }

        fn scroll_offset(&self) -> f32 {
            self.offset
        }

        fn scroll_to(&mut self, y: f32) {
            self.scrolled_to.push(y);
        }
    }

    #[test]
    fn test_route_only_item_prefix_matches() {
        let path = "/projects";
        assert!(is_active(path, &loc("/projects", "")));
        assert!(is_active(path, &loc("/projects/guardian", "")));
        assert!(is_active(path, &loc("/projects/guardian", "#problem")));
        assert!(!is_active(path, &loc("/about", "")));
    }

    #[test]
    fn test_root_item_matches_exactly() {
        assert!(is_active("/", &loc("/", "")));
        assert!(!is_active("/", &loc("/about", "")));
        assert!(!is_active("/", &loc("/projects", "")));
    }

    #[test]
    fn test_fragment_item_requires_exact_route_and_hash() {
        let path = "/projects/guardian#problem";
        assert!(is_active(path, &loc("/projects/guardian", "#problem")));
        // Same route, different fragment: inactive
        assert!(!is_active(path, &loc("/projects/guardian", "#overview")));
        // No hash at all: inactive
        assert!(!is_active(path, &loc("/projects/guardian", "")));
        // Fragment items never prefix-match the route
        assert!(!is_active(path, &loc("/projects/guardian/extra", "#problem")));
        assert!(!is_active(path, &loc("/projects/angular", "#problem")));
    }

    #[test]
    fn test_malformed_path_is_route_only() {
        // No route segment before the '#': treated as a plain route
        assert!(!is_active("#overview", &loc("/projects/guardian", "#overview")));

        let mut host = FakeHost::default();
        let req = handle_nav_click("#overview", &loc("/projects/guardian", ""), &mut host);
        assert_eq!(req, Some(NavRequest::Goto("#overview".to_string())));
        assert!(host.scrolled_to.is_empty());
    }

    #[test]
    fn test_hover_set_replaces_previous() {
        let mut hover = HoverState::default();
        hover.set(HoverKey::Item(0));
        assert!(hover.is_hovered(HoverKey::Item(0)));

        hover.set(HoverKey::Item(3));
        assert!(!hover.is_hovered(HoverKey::Item(0)));
        assert!(hover.is_hovered(HoverKey::Item(3)));
        assert_eq!(hover.current(), Some(HoverKey::Item(3)));
    }

    #[test]
    fn test_hover_clear_leaves_nothing_hovered() {
        let mut hover = HoverState::default();
        hover.set(HoverKey::Category(1));
        hover.clear();
        assert_eq!(hover.current(), None);
        assert!(!hover.is_hovered(HoverKey::Category(1)));
    }

    #[test]
    fn test_hover_keys_are_distinct_across_kinds() {
        let mut hover = HoverState::default();
        hover.set(HoverKey::Category(0));
        assert!(!hover.is_hovered(HoverKey::Item(0)));
        hover.set(HoverKey::Back);
        assert!(!hover.is_hovered(HoverKey::Category(0)));
        assert!(hover.is_hovered(HoverKey::Back));
    }

    #[test]
    fn test_same_route_fragment_click_scrolls_with_header_offset() {
        let mut host = FakeHost::default();
        host.anchors.insert("problem".to_string(), 640.0);
        host.offset = 120.0;

        let location = loc("/projects/guardian", "#problem");
        let req = handle_nav_click("/projects/guardian#problem", &location, &mut host);

        // Default navigation suppressed, one scroll issued
        assert_eq!(req, None);
        assert_eq!(host.scrolled_to, vec![640.0 + 120.0 - 200.0]);
    }

    #[test]
    fn test_sibling_fragment_click_targets_its_own_section() {
        let mut host = FakeHost::default();
        host.anchors.insert("problem".to_string(), 640.0);
        host.anchors.insert("overview".to_string(), 80.0);
        host.offset = 120.0;

        // Hash currently points at #problem; clicking #overview still
        // intercepts (same route) but scrolls to the overview section.
        let location = loc("/projects/guardian", "#problem");
        let req = handle_nav_click("/projects/guardian#overview", &location, &mut host);

        assert_eq!(req, None);
        assert_eq!(host.scrolled_to, vec![80.0 + 120.0 - 200.0]);
    }

    #[test]
    fn test_missing_anchor_is_a_silent_noop() {
        let mut host = FakeHost::default();
        let location = loc("/projects/guardian", "");
        let req = handle_nav_click("/projects/guardian#problem", &location, &mut host);

        // Still intercepted, but no scroll happens
        assert_eq!(req, None);
        assert!(host.scrolled_to.is_empty());
    }

    #[test]
    fn test_cross_page_fragment_click_navigates() {
        let mut host = FakeHost::default();
        host.anchors.insert("problem".to_string(), 640.0);

        let location = loc("/projects/angular", "");
        let req = handle_nav_click("/projects/guardian#problem", &location, &mut host);

        assert_eq!(
            req,
            Some(NavRequest::Goto("/projects/guardian#problem".to_string()))
        );
        assert!(host.scrolled_to.is_empty());
    }

    #[test]
    fn test_plain_route_click_navigates() {
        let mut host = FakeHost::default();
        let req = handle_nav_click("/projects", &loc("/projects/guardian", ""), &mut host);
        assert_eq!(req, Some(NavRequest::Goto("/projects".to_string())));
        assert!(host.scrolled_to.is_empty());
    }

    #[test]
    fn test_anchor_scroll_target_formula() {
        assert_eq!(anchor_scroll_target(640.0, 120.0), 560.0);
        assert_eq!(anchor_scroll_target(200.0, 0.0), 0.0);
        // Above-the-header sections produce negative targets; the host clamps
        assert_eq!(anchor_scroll_target(50.0, 0.0), -150.0);
    }

    #[test]
    fn test_render_mode_hides_on_marketing_pages() {
        assert_eq!(render_mode("/"), RenderMode::Hidden);
        assert_eq!(render_mode("/about"), RenderMode::Hidden);
        // Only exact matches hide the bar
        assert_eq!(render_mode("/about/me"), RenderMode::Default);
    }

    #[test]
    fn test_render_mode_selects_item_list() {
        assert_eq!(render_mode("/projects/guardian"), RenderMode::ProjectDetail);
        assert_eq!(render_mode("/projects/angular"), RenderMode::ProjectDetail);
        assert_eq!(render_mode("/projects"), RenderMode::Default);
        assert_eq!(render_mode("/contact"), RenderMode::Default);

        let items = nav_items(RenderMode::ProjectDetail);
        assert_eq!(items.len(), PROJECT_NAV_ITEMS.len());
        assert_eq!(items[0].path, PROJECT_NAV_ITEMS[0].path);
        assert!(nav_items(RenderMode::Hidden).is_empty());
        assert!(nav_items(RenderMode::Default).is_empty());
    }

    #[test]
    fn test_categories_gated_to_projects_list_with_callback() {
        assert!(categories_visible("/projects", true));
        assert!(!categories_visible("/projects", false));
        assert!(!categories_visible("/projects/guardian", true));
        assert!(!categories_visible("/", true));
    }

    #[test]
    fn test_project_nav_items_share_the_guardian_route() {
        for item in PROJECT_NAV_ITEMS {
            let (route, fragment) = split_route(item.path);
            assert_eq!(route, "/projects/guardian");
            assert!(fragment.is_some(), "section items carry a fragment");
            assert!(!item.label.is_empty());
        }
        // Paths are the identity: no duplicates
        let mut paths: Vec<_> = PROJECT_NAV_ITEMS.iter().map(|i| i.path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), PROJECT_NAV_ITEMS.len());
    }

    #[test]
    fn test_category_ids_are_unique() {
        let mut ids: Vec<_> = PROJECT_CATEGORY_ITEMS.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECT_CATEGORY_ITEMS.len());
    }

    #[test]
    fn test_split_route_edge_cases() {
        assert_eq!(split_route("/a#b"), ("/a", Some("b")));
        assert_eq!(split_route("/a"), ("/a", None));
        assert_eq!(split_route("/a#"), ("/a#", None));
        assert_eq!(split_route("#b"), ("#b", None));
        // Only the first '#' splits
        assert_eq!(split_route("/a#b#c"), ("/a", Some("b#c")));
    }
}
