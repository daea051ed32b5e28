//! Personal portfolio viewer built with Rust and egui.
//!
//! This library provides the portfolio's pages, navigation, and rendering
//! logic as a single-binary desktop viewer. The core subsystem is the
//! floating side navigation bar: active-item resolution against the current
//! route, offset-corrected smooth scrolling to anchored sections, hover
//! tooltips, and an optional project-category filter.

pub mod app;
pub mod content;
pub mod markdown;
pub mod router;
pub mod scroll;
pub mod side_nav;
pub mod theme;
pub mod widgets;
pub mod window_state;

pub use app::{PortfolioApp, APP_TITLE_PREFIX};
pub use markdown::{MarkdownElement, MarkdownRenderer};
pub use router::{Location, Router};
pub use scroll::{ScrollController, ScrollHost};
pub use side_nav::{
    handle_nav_click, is_active, render_mode, HoverKey, HoverState, NavItem, NavRequest,
    RenderMode, SideNav,
};
pub use theme::{apply_theme_visuals, ThemeColors};
pub use window_state::{
    load_app_settings, load_window_state, sanitize_window_state, save_app_settings,
    save_window_state, AppSettings, WindowState,
};
