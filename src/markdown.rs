//! Markdown parsing and rendering for portfolio section bodies.
//!
//! The content pages are authored as embedded markdown. This module parses
//! them with pulldown-cmark into a small element model and renders the
//! elements into egui with the active theme palette. The element set is
//! deliberately narrow; portfolio copy is prose, lists, quotes and links.

use crate::theme::ThemeColors;
use anyhow::Result;
use egui::RichText;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

/// Font size configuration, scaled by the renderer's zoom factor.
#[derive(Debug, Clone)]
pub struct FontSizes {
    pub body: f32,
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
    pub h4: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            body: 15.0,
            h1: 30.0,
            h2: 24.0,
            h3: 19.0,
            h4: 16.0,
        }
    }
}

/// An inline text span with a single formatting kind.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineSpan {
    Text(String),
    Code(String),
    Strong(String),
    Emphasis(String),
    Strikethrough(String),
    Link { text: String, url: String },
}

/// A block-level element of a section body.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkdownElement {
    Paragraph(Vec<InlineSpan>),
    Header { level: u8, spans: Vec<InlineSpan> },
    List { ordered: bool, items: Vec<Vec<InlineSpan>> },
    Quote(Vec<Vec<InlineSpan>>),
    Rule,
}

/// Inline formatting state while walking the event stream.
#[derive(Default)]
struct InlineStyle {
    strong: bool,
    emphasis: bool,
    strike: bool,
    link_url: Option<String>,
}

impl InlineStyle {
    fn span_for(&self, text: String) -> InlineSpan {
        if let Some(url) = &self.link_url {
            InlineSpan::Link {
                text,
                url: url.clone(),
            }
        } else if self.strong {
            InlineSpan::Strong(text)
        } else if self.emphasis {
            InlineSpan::Emphasis(text)
        } else if self.strike {
            InlineSpan::Strikethrough(text)
        } else {
            InlineSpan::Text(text)
        }
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Markdown renderer with a zoom scale shared across all pages.
pub struct MarkdownRenderer {
    font_sizes: FontSizes,
    zoom: f32,
}

const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 2.5;
const ZOOM_STEP: f32 = 0.1;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            font_sizes: FontSizes::default(),
            zoom: 1.0,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    fn scaled(&self, size: f32) -> f32 {
        size * self.zoom
    }

    /// Parse markdown into the element model.
    pub fn parse(&self, markdown: &str) -> Result<Vec<MarkdownElement>> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        let parser = Parser::new_ext(markdown, options);

        let mut elements = Vec::new();
        let mut style = InlineStyle::default();
        // Block currently being accumulated
        let mut spans: Vec<InlineSpan> = Vec::new();
        let mut header_level: Option<u8> = None;
        let mut list_items: Option<(bool, Vec<Vec<InlineSpan>>)> = None;
        let mut quote_lines: Option<Vec<Vec<InlineSpan>>> = None;

        for event in parser {
            match event {
                Event::Start(Tag::Heading(level, _, _)) => {
                    header_level = Some(heading_depth(level));
                    spans.clear();
                }
                Event::End(Tag::Heading(..)) => {
                    if let Some(level) = header_level.take() {
                        elements.push(MarkdownElement::Header {
                            level,
                            spans: std::mem::take(&mut spans),
                        });
                    }
                }
                Event::Start(Tag::Paragraph) => spans.clear(),
                Event::End(Tag::Paragraph) => {
                    let line = std::mem::take(&mut spans);
                    if let Some(lines) = quote_lines.as_mut() {
                        lines.push(line);
                    } else if list_items.is_none() && !line.is_empty() {
                        elements.push(MarkdownElement::Paragraph(line));
                    } else if let Some((_, items)) = list_items.as_mut() {
                        // Loose list: the item's paragraph carries the spans
                        if let Some(last) = items.last_mut() {
                            last.extend(line);
                        }
                    }
                }
                Event::Start(Tag::List(start)) => {
                    list_items = Some((start.is_some(), Vec::new()));
                }
                Event::End(Tag::List(_)) => {
                    if let Some((ordered, items)) = list_items.take() {
                        elements.push(MarkdownElement::List { ordered, items });
                    }
                }
                Event::Start(Tag::Item) => {
                    if let Some((_, items)) = list_items.as_mut() {
                        items.push(Vec::new());
                    }
                    spans.clear();
                }
                Event::End(Tag::Item) => {
                    if let Some((_, items)) = list_items.as_mut() {
                        if let Some(last) = items.last_mut() {
                            last.extend(std::mem::take(&mut spans));
                        }
                    }
                }
                Event::Start(Tag::BlockQuote) => quote_lines = Some(Vec::new()),
                Event::End(Tag::BlockQuote) => {
                    if let Some(lines) = quote_lines.take() {
                        elements.push(MarkdownElement::Quote(lines));
                    }
                }
                Event::Start(Tag::Strong) => style.strong = true,
                Event::End(Tag::Strong) => style.strong = false,
                Event::Start(Tag::Emphasis) => style.emphasis = true,
                Event::End(Tag::Emphasis) => style.emphasis = false,
                Event::Start(Tag::Strikethrough) => style.strike = true,
                Event::End(Tag::Strikethrough) => style.strike = false,
                Event::Start(Tag::Link(_, url, _)) => style.link_url = Some(url.to_string()),
                Event::End(Tag::Link(..)) => style.link_url = None,
                Event::Text(text) => spans.push(style.span_for(text.to_string())),
                Event::Code(code) => spans.push(InlineSpan::Code(code.to_string())),
                Event::SoftBreak | Event::HardBreak => {
                    spans.push(style.span_for(" ".to_string()));
                }
                Event::Rule => elements.push(MarkdownElement::Rule),
                _ => {}
            }
        }

        Ok(elements)
    }

    /// Render parsed elements. Returns the fragment of an internal anchor
    /// link the user clicked this frame, if any.
    pub fn render_to_ui(
        &self,
        ui: &mut egui::Ui,
        elements: &[MarkdownElement],
        colors: &ThemeColors,
    ) -> Option<String> {
        let mut clicked_anchor = None;
        for element in elements {
            match element {
                MarkdownElement::Header { level, spans } => {
                    let size = match level {
                        1 => self.scaled(self.font_sizes.h1),
                        2 => self.scaled(self.font_sizes.h2),
                        3 => self.scaled(self.font_sizes.h3),
                        _ => self.scaled(self.font_sizes.h4),
                    };
                    ui.add_space(6.0);
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        for span in spans {
                            ui.label(
                                RichText::new(span_text(span))
                                    .size(size)
                                    .strong()
                                    .color(colors.heading),
                            );
                        }
                    });
                    ui.add_space(2.0);
                }
                MarkdownElement::Paragraph(spans) => {
                    self.render_spans(ui, spans, colors, &mut clicked_anchor);
                }
                MarkdownElement::List { ordered, items } => {
                    for (index, item) in items.iter().enumerate() {
                        ui.horizontal_wrapped(|ui| {
                            ui.spacing_mut().item_spacing.x = 0.0;
                            let marker = if *ordered {
                                format!("{}. ", index + 1)
                            } else {
                                "• ".to_string()
                            };
                            ui.label(
                                RichText::new(marker)
                                    .size(self.scaled(self.font_sizes.body))
                                    .color(colors.body_soft),
                            );
                            self.render_spans_inline(ui, item, colors, &mut clicked_anchor);
                        });
                    }
                }
                MarkdownElement::Quote(lines) => {
                    ui.horizontal(|ui| {
                        let bar_height =
                            lines.len() as f32 * self.scaled(self.font_sizes.body) * 1.6;
                        let (bar, _) = ui.allocate_exact_size(
                            egui::vec2(3.0, bar_height.max(self.scaled(self.font_sizes.body))),
                            egui::Sense::hover(),
                        );
                        ui.painter().rect_filled(bar, 1.0, colors.quote_bar);
                        ui.add_space(6.0);
                        ui.vertical(|ui| {
                            for line in lines {
                                ui.horizontal_wrapped(|ui| {
                                    ui.spacing_mut().item_spacing.x = 0.0;
                                    for span in line {
                                        ui.label(
                                            RichText::new(span_text(span))
                                                .size(self.scaled(self.font_sizes.body))
                                                .italics()
                                                .color(colors.quote_text),
                                        );
                                    }
                                });
                            }
                        });
                    });
                }
                MarkdownElement::Rule => {
                    ui.add_space(4.0);
                    ui.separator();
                    ui.add_space(4.0);
                }
            }
        }
        clicked_anchor
    }

    fn render_spans(
        &self,
        ui: &mut egui::Ui,
        spans: &[InlineSpan],
        colors: &ThemeColors,
        clicked_anchor: &mut Option<String>,
    ) {
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            self.render_spans_inline(ui, spans, colors, clicked_anchor);
        });
    }

    fn render_spans_inline(
        &self,
        ui: &mut egui::Ui,
        spans: &[InlineSpan],
        colors: &ThemeColors,
        clicked_anchor: &mut Option<String>,
    ) {
        let body = self.scaled(self.font_sizes.body);
        for span in spans {
            match span {
                InlineSpan::Text(text) => {
                    ui.label(RichText::new(text).size(body).color(colors.body_text));
                }
                InlineSpan::Strong(text) => {
                    ui.label(
                        RichText::new(text)
                            .size(body)
                            .strong()
                            .color(colors.body_text),
                    );
                }
                InlineSpan::Emphasis(text) => {
                    ui.label(
                        RichText::new(text)
                            .size(body)
                            .italics()
                            .color(colors.body_text),
                    );
                }
                InlineSpan::Strikethrough(text) => {
                    ui.label(
                        RichText::new(text)
                            .size(body)
                            .strikethrough()
                            .color(colors.body_soft),
                    );
                }
                InlineSpan::Code(code) => {
                    ui.label(
                        RichText::new(code)
                            .size(self.scaled(self.font_sizes.body - 1.0))
                            .monospace()
                            .background_color(colors.inline_code_bg)
                            .color(colors.inline_code_fg),
                    );
                }
                InlineSpan::Link { text, url } => {
                    if let Some(fragment) = url.strip_prefix('#') {
                        // In-page anchor: report the click, the shell scrolls
                        let link = ui.link(
                            RichText::new(text).size(body).color(colors.link),
                        );
                        if link.clicked() {
                            *clicked_anchor = Some(fragment.to_string());
                        }
                    } else {
                        ui.hyperlink_to(RichText::new(text).size(body), url);
                    }
                }
            }
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn span_text(span: &InlineSpan) -> &str {
    match span {
        InlineSpan::Text(t)
        | InlineSpan::Code(t)
        | InlineSpan::Strong(t)
        | InlineSpan::Emphasis(t)
        | InlineSpan::Strikethrough(t) => t,
        InlineSpan::Link { text, .. } => text,
    }
}
