/// Main application logic for the portfolio viewer
///
/// This module contains the primary app state, UI logic, and event handling
/// for the portfolio viewer application built with egui. The shell owns the
/// router, the scroll controller, and the lifted category-filter state; the
/// side navigation bar reads location snapshots and signals back.
use crate::content::{self, Project};
use crate::markdown::{MarkdownElement, MarkdownRenderer};
use crate::router::{Location, Router};
use crate::scroll::{ScrollController, ScrollHost};
use crate::side_nav::{anchor_scroll_target, CategoryFilter, NavRequest, SideNav};
use crate::theme::{apply_theme_visuals, ThemeColors};
use crate::widgets::{self, ButtonVariant};
use crate::window_state::{save_app_settings, save_window_state, sanitize_window_state, AppSettings, WindowState};
use egui::{CentralPanel, Context, FontId, RichText, Sense, TopBottomPanel};

pub const APP_TITLE_PREFIX: &str = "FolioView";

/// What the central panel renders for the current route, rebuilt on every
/// navigation so markdown is parsed once per page, not once per frame.
enum PageModel {
    /// A single markdown page (home, about).
    Markdown(Vec<MarkdownElement>),
    /// The filterable projects grid.
    Projects,
    /// A case study: parsed bodies parallel to the project's sections.
    Project {
        slug: String,
        bodies: Vec<Vec<MarkdownElement>>,
    },
    NotFound,
}

/// Clicks collected while rendering the page body, applied afterwards.
#[derive(Default)]
struct PageEvents {
    navigate: Option<String>,
    anchor: Option<String>,
}

/// Main application state and logic
pub struct PortfolioApp {
    router: Router,
    renderer: MarkdownRenderer,
    side_nav: SideNav,
    scroll: ScrollController,
    page: PageModel,
    /// Lifted state for the side bar's category filter.
    selected_category: String,
    /// Fragment carried by the last cross-page navigation, consumed once the
    /// destination section has registered its anchor.
    pending_anchor: Option<String>,
    dark_mode: bool,
    title: String,
    applied_title: String,
    last_window_state: Option<WindowState>,
    error_message: Option<String>,
}

impl PortfolioApp {
    /// Create a new application instance showing the home page.
    pub fn new() -> Self {
        let mut app = Self {
            router: Router::default(),
            renderer: MarkdownRenderer::new(),
            side_nav: SideNav::new(),
            scroll: ScrollController::new(),
            page: PageModel::NotFound,
            selected_category: "all".to_string(),
            pending_anchor: None,
            dark_mode: false,
            title: String::new(),
            applied_title: String::new(),
            last_window_state: None,
            error_message: None,
        };
        app.rebuild_page();
        app
    }

    /// Apply persisted settings (theme, zoom) loaded at startup.
    pub fn apply_settings(&mut self, settings: AppSettings) {
        self.dark_mode = settings.dark_mode;
        self.renderer.set_zoom(settings.zoom);
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn location(&self) -> &Location {
        self.router.location()
    }

    /// Perform a full route change: reset scrolling, forget the old page's
    /// anchors, and remember the destination fragment for later.
    pub fn navigate(&mut self, path: &str) {
        self.router.goto(path);
        self.after_route_change();
    }

    /// Pop the navigation history, if there is anywhere to go back to.
    pub fn go_back(&mut self) {
        if self.router.back() {
            self.after_route_change();
        }
    }

    fn after_route_change(&mut self) {
        self.scroll.clear_anchors();
        self.scroll.jump(0.0);
        self.pending_anchor = self.router.location().fragment().map(str::to_string);
        self.rebuild_page();
    }

    /// Parse the current route's content into a page model.
    fn rebuild_page(&mut self) {
        self.error_message = None;
        let pathname = self.router.location().pathname.clone();
        self.page = match pathname.as_str() {
            "/" => self.parse_markdown_page(content::HOME_CONTENT),
            "/about" => self.parse_markdown_page(content::ABOUT_CONTENT),
            "/projects" => PageModel::Projects,
            _ => match pathname.strip_prefix("/projects/") {
                Some(slug) => match content::project_by_slug(slug) {
                    Some(project) => {
                        let mut bodies = Vec::with_capacity(project.sections.len());
                        for section in project.sections {
                            match self.renderer.parse(section.body) {
                                Ok(elements) => bodies.push(elements),
                                Err(e) => {
                                    self.error_message =
                                        Some(format!("Failed to parse section: {}", e));
                                    bodies.push(Vec::new());
                                }
                            }
                        }
                        PageModel::Project {
                            slug: slug.to_string(),
                            bodies,
                        }
                    }
                    None => PageModel::NotFound,
                },
                None => PageModel::NotFound,
            },
        };
        self.title = format!("{} - {}", APP_TITLE_PREFIX, page_title(self.router.location()));
    }

    fn parse_markdown_page(&mut self, markdown: &str) -> PageModel {
        match self.renderer.parse(markdown) {
            Ok(elements) => PageModel::Markdown(elements),
            Err(e) => {
                self.error_message = Some(format!("Failed to parse page: {}", e));
                PageModel::Markdown(Vec::new())
            }
        }
    }

    /// Scroll to the fragment of the last navigation once its section has
    /// rendered. A fragment that never mounts simply stays pending until the
    /// next navigation replaces it.
    fn consume_pending_anchor(&mut self) {
        let Some(fragment) = self.pending_anchor.as_deref() else {
            return;
        };
        if let Some(top) = self.scroll.anchor_top(fragment) {
            let offset = self.scroll.scroll_offset();
            self.scroll.scroll_to(anchor_scroll_target(top, offset));
            self.pending_anchor = None;
        }
    }

    /// In-page anchor click from a markdown body link.
    fn scroll_to_fragment(&mut self, fragment: &str) {
        if let Some(top) = self.scroll.anchor_top(fragment) {
            let offset = self.scroll.scroll_offset();
            self.scroll.scroll_to(anchor_scroll_target(top, offset));
        }
    }

    fn persist_settings(&self) {
        let settings = AppSettings {
            dark_mode: self.dark_mode,
            zoom: self.renderer.zoom(),
        };
        if let Err(e) = save_app_settings(&settings) {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    /// Handle keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &Context) {
        ctx.input_mut(|i| {
            // Ctrl+Q - Quit application
            if i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::CTRL,
                egui::Key::Q,
            )) {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }

            // Ctrl+D - Toggle dark mode
            if i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::CTRL,
                egui::Key::D,
            )) {
                self.dark_mode = !self.dark_mode;
                apply_theme_visuals(ctx, self.dark_mode);
                self.persist_settings();
            }

            // Ctrl+Plus - Zoom in
            if i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::CTRL,
                egui::Key::Plus,
            )) {
                self.renderer.zoom_in();
                self.persist_settings();
            }

            // Ctrl+Minus - Zoom out
            if i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::CTRL,
                egui::Key::Minus,
            )) {
                self.renderer.zoom_out();
                self.persist_settings();
            }

            // Ctrl+0 - Reset zoom
            if i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::CTRL,
                egui::Key::Num0,
            )) {
                self.renderer.reset_zoom();
                self.persist_settings();
            }

            // Alt+Left - Back
            if i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::ALT,
                egui::Key::ArrowLeft,
            )) {
                self.go_back();
            }

            // F11 - Toggle fullscreen
            if i.consume_key(egui::Modifiers::NONE, egui::Key::F11) {
                let is_fullscreen = ctx.input(|i| i.viewport().fullscreen.unwrap_or(false));
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(!is_fullscreen));
            }
        });
    }

    /// Render the fixed site header: name on the left, page links and the
    /// theme toggle on the right.
    fn render_header(&mut self, ctx: &Context) {
        let colors = ThemeColors::current(self.dark_mode);
        let mut target: Option<&str> = None;
        let mut toggle_theme = false;

        TopBottomPanel::top("site_header").show(ctx, |ui| {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Noa Linden")
                        .size(18.0)
                        .strong()
                        .color(colors.heading),
                );
                ui.label(RichText::new("●").size(10.0).color(colors.accent));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_icon = if self.dark_mode { "☀" } else { "🌙" };
                    if ui.button(theme_icon).clicked() {
                        toggle_theme = true;
                    }
                    ui.add_space(8.0);

                    for (label, path) in
                        [("Projects", "/projects"), ("About", "/about"), ("Home", "/")]
                    {
                        let active = crate::side_nav::is_active(path, self.router.location());
                        let text = if active {
                            RichText::new(label).strong().color(colors.accent)
                        } else {
                            RichText::new(label).color(colors.heading)
                        };
                        let resp = ui.add(egui::Label::new(text).sense(Sense::click()));
                        if resp.clicked() {
                            target = Some(path);
                        }
                        ui.add_space(10.0);
                    }
                });
            });
            ui.add_space(10.0);
        });

        if toggle_theme {
            self.dark_mode = !self.dark_mode;
            apply_theme_visuals(ctx, self.dark_mode);
            self.persist_settings();
        }
        if let Some(path) = target {
            self.navigate(path);
        }
    }

    /// Render the status bar
    fn render_status_bar(&self, ctx: &Context) {
        let colors = ThemeColors::current(self.dark_mode);
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let location = self.router.location();
                ui.label(
                    RichText::new(format!("{}{}", location.pathname, location.hash))
                        .size(12.0)
                        .color(colors.body_soft),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut hint = String::from("Ctrl+D theme  |  Alt+\u{2190} back");
                    if (self.renderer.zoom() - 1.0).abs() > f32::EPSILON {
                        hint = format!(
                            "Zoom {:.0}%  |  {}",
                            self.renderer.zoom() * 100.0,
                            hint
                        );
                    }
                    ui.label(RichText::new(hint).size(12.0).color(colors.status_hint));
                });
            });
        });
    }

    /// Render the current page into the scroll area. Returns the clicks to
    /// apply once rendering is done.
    fn render_page(&mut self, ui: &mut egui::Ui) -> PageEvents {
        let colors = ThemeColors::current(self.dark_mode);
        let mut events = PageEvents::default();

        match &self.page {
            PageModel::Markdown(elements) => {
                events.anchor = self.renderer.render_to_ui(ui, elements, colors);
                if self.router.location().pathname == "/" {
                    ui.add_space(16.0);
                    ui.horizontal(|ui| {
                        if widgets::cta_button(
                            ui,
                            colors,
                            "View Projects",
                            ButtonVariant::Primary,
                            true,
                        )
                        .clicked()
                        {
                            events.navigate = Some("/projects".to_string());
                        }
                        ui.add_space(8.0);
                        if widgets::cta_button(
                            ui,
                            colors,
                            "About Me",
                            ButtonVariant::Outline,
                            true,
                        )
                        .clicked()
                        {
                            events.navigate = Some("/about".to_string());
                        }
                    });
                }
            }
            PageModel::Projects => {
                ui.label(
                    RichText::new("Projects")
                        .size(30.0)
                        .strong()
                        .color(colors.heading),
                );
                ui.label(
                    RichText::new("Filter by discipline with the side bar.")
                        .size(14.0)
                        .color(colors.body_soft),
                );
                ui.add_space(12.0);

                for project in visible_projects(&self.selected_category) {
                    if render_project_card(ui, colors, project) {
                        events.navigate = Some(format!("/projects/{}", project.slug));
                    }
                    ui.add_space(10.0);
                }
            }
            PageModel::Project { slug, bodies } => {
                if let Some(project) = content::project_by_slug(slug) {
                    ui.label(
                        RichText::new(project.title)
                            .size(32.0)
                            .strong()
                            .color(colors.heading),
                    );
                    ui.label(
                        RichText::new(project.tagline)
                            .size(16.0)
                            .italics()
                            .color(colors.body_soft),
                    );
                    ui.label(
                        RichText::new(format!("{} · {}", project.year, project.category))
                            .size(12.0)
                            .color(colors.status_hint),
                    );
                    ui.add_space(10.0);

                    for (section, elements) in project.sections.iter().zip(bodies) {
                        ui.add_space(14.0);
                        // The anchor is the section heading's on-screen top
                        self.scroll.register_anchor(section.id, ui.cursor().top());
                        ui.horizontal(|ui| {
                            let (bar, _) = ui
                                .allocate_exact_size(egui::vec2(30.0, 2.0), Sense::hover());
                            ui.painter().rect_filled(bar, 0.0, colors.heading);
                            ui.label(
                                RichText::new(section.title)
                                    .size(22.0)
                                    .strong()
                                    .color(colors.heading),
                            );
                        });
                        ui.add_space(4.0);
                        if let Some(anchor) =
                            self.renderer.render_to_ui(ui, elements, colors)
                        {
                            events.anchor = Some(anchor);
                        }
                    }

                    if !project.next_steps.is_empty() {
                        ui.add_space(18.0);
                        widgets::next_steps_section(
                            ui,
                            colors,
                            project.next_steps_intro,
                            project.next_steps,
                        );
                    }

                    ui.add_space(18.0);
                    if widgets::cta_button(
                        ui,
                        colors,
                        "Back to all projects",
                        ButtonVariant::Secondary,
                        true,
                    )
                    .clicked()
                    {
                        events.navigate = Some("/projects".to_string());
                    }
                }
            }
            PageModel::NotFound => {
                ui.add_space(40.0);
                ui.label(
                    RichText::new("Nothing lives here.")
                        .size(24.0)
                        .strong()
                        .color(colors.heading),
                );
                ui.label(
                    RichText::new("The page you followed doesn't exist in this portfolio.")
                        .size(14.0)
                        .color(colors.body_soft),
                );
                ui.add_space(12.0);
                if widgets::cta_button(ui, colors, "Go Home", ButtonVariant::Primary, true)
                    .clicked()
                {
                    events.navigate = Some("/".to_string());
                }
            }
        }

        events
    }
}

impl eframe::App for PortfolioApp {
    /// Update function called every frame
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.render_header(ctx);
        self.render_status_bar(ctx);

        // Side navigation bar: reads a location snapshot, signals back
        let location = self.router.location().clone();
        let mut category_change: Option<String> = None;
        let request = {
            let selected = self.selected_category.clone();
            let mut on_select = |id: &str| category_change = Some(id.to_string());
            let filter = CategoryFilter {
                selected: Some(&selected),
                on_select: &mut on_select,
            };
            self.side_nav
                .show(ctx, &location, Some(filter), &mut self.scroll, self.dark_mode)
        };
        if let Some(id) = category_change {
            log::debug!("category filter: {}", id);
            self.selected_category = id;
        }
        if let Some(NavRequest::Goto(path)) = request {
            self.navigate(&path);
        }

        // Page body
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        let animated_offset = self.scroll.tick(dt);
        if self.scroll.is_animating() {
            ctx.request_repaint();
        }

        let mut events = PageEvents::default();
        let error = self.error_message.clone();
        CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &error {
                ui.colored_label(egui::Color32::RED, format!("⚠ {}", error));
                ui.separator();
            }

            let mut scroll_area = egui::ScrollArea::vertical().auto_shrink([false, false]);
            if let Some(offset) = animated_offset {
                scroll_area = scroll_area.vertical_scroll_offset(offset);
            }
            let output = scroll_area.show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 8.0;
                egui::Frame::none()
                    .inner_margin(egui::Margin {
                        left: 110.0,
                        right: 48.0,
                        top: 20.0,
                        bottom: 48.0,
                    })
                    .show(ui, |ui| {
                        ui.set_max_width(760.0);
                        events = self.render_page(ui);
                    });
            });
            self.scroll.sync_offset(output.state.offset.y);
        });

        if let Some(path) = events.navigate.take() {
            self.navigate(&path);
        }
        if let Some(fragment) = events.anchor.take() {
            self.scroll_to_fragment(&fragment);
        }
        self.consume_pending_anchor();
        if self.pending_anchor.is_some() {
            ctx.request_repaint();
        }

        // Keep the native title in sync with the current page
        if self.title != self.applied_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.title.clone()));
            self.applied_title = self.title.clone();
        }

        // Track window geometry for persistence at exit
        let info = ctx.input(|i| i.viewport().clone());
        if let (Some(outer), Some(inner)) = (info.outer_rect, info.inner_rect) {
            self.last_window_state = Some(WindowState {
                pos: [outer.left(), outer.top()],
                size: [inner.width(), inner.height()],
                maximized: info.maximized.unwrap_or(false),
            });
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(ws) = self.last_window_state.and_then(sanitize_window_state) {
            if let Err(e) = save_window_state(&ws) {
                log::warn!("Failed to save window state: {}", e);
            }
        }
        self.persist_settings();
    }
}

impl Default for PortfolioApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Window title suffix for a location.
fn page_title(location: &Location) -> String {
    match location.pathname.as_str() {
        "/" => "Home".to_string(),
        "/about" => "About".to_string(),
        "/projects" => "Projects".to_string(),
        other => match other
            .strip_prefix("/projects/")
            .and_then(content::project_by_slug)
        {
            Some(project) => project.title.to_string(),
            None => "Not Found".to_string(),
        },
    }
}

/// Projects visible under the given category filter. "all" shows everything.
fn visible_projects(selected: &str) -> Vec<&'static Project> {
    content::PROJECTS
        .iter()
        .filter(|p| selected == "all" || p.category == selected)
        .collect()
}

/// One card on the projects grid. Returns true when clicked through.
fn render_project_card(ui: &mut egui::Ui, colors: &ThemeColors, project: &Project) -> bool {
    let mut open = false;
    egui::Frame::none()
        .fill(colors.card_bg)
        .stroke(egui::Stroke::new(1.0, colors.card_border))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(18.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(project.title)
                        .size(20.0)
                        .strong()
                        .color(colors.heading),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let chip_text = format!("{} · {}", project.year, project.category);
                    let galley = ui.painter().layout_no_wrap(
                        chip_text.clone(),
                        FontId::proportional(12.0),
                        colors.body_soft,
                    );
                    let (chip, _) = ui.allocate_exact_size(
                        galley.size() + egui::vec2(16.0, 8.0),
                        Sense::hover(),
                    );
                    ui.painter().rect_filled(chip, 8.0, colors.chip_bg);
                    ui.painter().text(
                        chip.center(),
                        egui::Align2::CENTER_CENTER,
                        chip_text,
                        FontId::proportional(12.0),
                        colors.body_soft,
                    );
                });
            });
            ui.label(
                RichText::new(project.tagline)
                    .size(14.0)
                    .color(colors.body_soft),
            );
            ui.add_space(8.0);
            if widgets::cta_button(ui, colors, "Read case study", ButtonVariant::Primary, true)
                .clicked()
            {
                open = true;
            }
        });
    open
}
