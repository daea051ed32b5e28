//! Presentational widgets shared across pages: the call-to-action button and
//! the "next steps" list used at the end of case studies.

use crate::theme::ThemeColors;
use egui::{Align2, Color32, FontId, Mesh, Pos2, Rect, Response, RichText, Sense, Shape, Stroke};

/// Visual style of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Pink-to-brown gradient pill.
    Primary,
    /// Brown-to-pink gradient pill.
    Secondary,
    /// Bordered pill that fills on hover.
    Outline,
}

/// Outline buttons never show the trailing arrow, whatever the caller asks.
pub fn arrow_visible(variant: ButtonVariant, show_arrow: bool) -> bool {
    show_arrow && variant != ButtonVariant::Outline
}

/// Zero-padded step number label: first step is "01".
pub fn step_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Pill-shaped call-to-action button. The arrow nudges right while hovered.
pub fn cta_button(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    label: &str,
    variant: ButtonVariant,
    show_arrow: bool,
) -> Response {
    let font = FontId::proportional(15.0);
    let arrow = arrow_visible(variant, show_arrow);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), font.clone(), Color32::WHITE);
    let arrow_width = if arrow { 20.0 } else { 0.0 };
    let padding = egui::vec2(24.0, 11.0);
    let size = egui::vec2(
        galley.size().x + arrow_width + padding.x * 2.0,
        galley.size().y + padding.y * 2.0,
    );

    let (rect, resp) = ui.allocate_exact_size(size, Sense::click());
    let hover_t = ui
        .ctx()
        .animate_bool_with_time(resp.id.with("cta_hover"), resp.hovered(), 0.15);

    let painter = ui.painter();
    let text_color = match variant {
        ButtonVariant::Primary => {
            // Slight dim on hover, as the original's opacity drop
            let dim = 1.0 - 0.1 * hover_t;
            pill_gradient(
                painter,
                rect,
                colors.button_grad_start.gamma_multiply(dim),
                colors.button_grad_end.gamma_multiply(dim),
            );
            colors.button_text
        }
        ButtonVariant::Secondary => {
            let dim = 1.0 - 0.1 * hover_t;
            pill_gradient(
                painter,
                rect,
                colors.button_grad_end.gamma_multiply(dim),
                colors.button_grad_start.gamma_multiply(dim),
            );
            colors.button_text
        }
        ButtonVariant::Outline => {
            let radius = rect.height() / 2.0;
            if hover_t > 0.0 {
                painter.rect_filled(
                    rect,
                    radius,
                    colors.heading.gamma_multiply(hover_t),
                );
            }
            painter.rect_stroke(rect, radius, Stroke::new(2.0, colors.heading));
            if hover_t > 0.5 {
                colors.page_bg
            } else {
                colors.heading
            }
        }
    };

    let text_pos = Pos2::new(rect.left() + padding.x, rect.center().y);
    painter.text(text_pos, Align2::LEFT_CENTER, label, font, text_color);
    if arrow {
        let arrow_pos = Pos2::new(
            rect.right() - padding.x + 4.0 * hover_t,
            rect.center().y,
        );
        painter.text(
            arrow_pos,
            Align2::RIGHT_CENTER,
            "→",
            FontId::proportional(15.0),
            text_color,
        );
    }

    resp
}

/// Horizontal gradient pill: solid end caps plus a gradient body. The caps
/// are exact half-circles, so the silhouette stays a true pill.
fn pill_gradient(painter: &egui::Painter, rect: Rect, left: Color32, right: Color32) {
    let radius = rect.height() / 2.0;
    let cy = rect.center().y;
    painter.circle_filled(Pos2::new(rect.left() + radius, cy), radius, left);
    painter.circle_filled(Pos2::new(rect.right() - radius, cy), radius, right);

    let body = Rect::from_min_max(
        Pos2::new(rect.left() + radius, rect.top()),
        Pos2::new(rect.right() - radius, rect.bottom()),
    );
    if body.width() <= 0.0 {
        return;
    }
    let mut mesh = Mesh::default();
    mesh.colored_vertex(body.left_top(), left);
    mesh.colored_vertex(body.right_top(), right);
    mesh.colored_vertex(body.right_bottom(), right);
    mesh.colored_vertex(body.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Closing "next steps" block: title, introduction card, numbered steps.
pub fn next_steps_section(
    ui: &mut egui::Ui,
    colors: &ThemeColors,
    intro: &str,
    steps: &[&str],
) {
    ui.horizontal(|ui| {
        let (bar, _) = ui.allocate_exact_size(egui::vec2(30.0, 2.0), Sense::hover());
        ui.painter().rect_filled(bar, 0.0, colors.heading);
        ui.label(
            RichText::new("Next Steps")
                .size(24.0)
                .strong()
                .color(colors.heading),
        );
    });
    ui.add_space(8.0);

    if !intro.is_empty() {
        egui::Frame::none()
            .fill(colors.chip_bg)
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.label(RichText::new(intro).size(15.0).color(colors.body_soft));
            });
        ui.add_space(10.0);
    }

    for (index, step) in steps.iter().enumerate() {
        egui::Frame::none()
            .fill(colors.card_bg)
            .stroke(Stroke::new(1.0, colors.card_border))
            .rounding(egui::Rounding::same(10.0))
            .inner_margin(egui::Margin::same(16.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let (chip, _) =
                        ui.allocate_exact_size(egui::vec2(28.0, 28.0), Sense::hover());
                    ui.painter()
                        .rect_filled(chip, 6.0, colors.chip_bg);
                    ui.painter().text(
                        chip.center(),
                        Align2::CENTER_CENTER,
                        step_number(index),
                        FontId::proportional(13.0),
                        colors.heading,
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new("➜").size(14.0).color(colors.body_soft),
                    );
                    ui.add_space(4.0);
                    ui.label(RichText::new(*step).size(15.0).color(colors.body_text));
                });
            });
        ui.add_space(8.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_hidden_for_outline() {
        assert!(arrow_visible(ButtonVariant::Primary, true));
        assert!(arrow_visible(ButtonVariant::Secondary, true));
        assert!(!arrow_visible(ButtonVariant::Outline, true));
    }

    #[test]
    fn test_arrow_respects_caller_flag() {
        assert!(!arrow_visible(ButtonVariant::Primary, false));
        assert!(!arrow_visible(ButtonVariant::Secondary, false));
        assert!(!arrow_visible(ButtonVariant::Outline, false));
    }

    #[test]
    fn test_step_numbers_are_zero_padded() {
        assert_eq!(step_number(0), "01");
        assert_eq!(step_number(1), "02");
        assert_eq!(step_number(9), "10");
        assert_eq!(step_number(99), "100");
    }
}
