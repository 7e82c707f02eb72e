use commitment::review::view::{
    self, ConsentKind, ConsentRow, DetailRow, ReviewView, StepStatus, WizardStepBadge,
};
use eframe::egui;

const MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(15, 240, 252);
const HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);
const WARNING: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewIntent {
    Back,
    ToggleTerms,
    ToggleRisks,
    Submit,
    DismissError,
}

/// Draw the review step and collect what the user activated this frame.
pub fn render_review_step(ui: &mut egui::Ui, review: &ReviewView) -> Vec<ReviewIntent> {
    let mut intents = Vec::new();

    egui::ScrollArea::vertical().show(ui, |ui| {
        if ui.button(format!("⬅ {}", view::BACK_LABEL)).clicked() {
            intents.push(ReviewIntent::Back);
        }
        ui.add_space(8.0);

        ui.heading(view::TITLE);
        ui.colored_label(MUTED, view::SUBTITLE);
        ui.separator();

        render_stepper(ui, &review.steps);
        ui.add_space(12.0);

        ui.label(egui::RichText::new(view::REVIEW_TITLE).size(20.0).strong());
        ui.colored_label(MUTED, view::REVIEW_SUBTITLE);
        ui.add_space(8.0);

        render_summary_card(ui, review);
        ui.add_space(12.0);

        for row in &review.consents {
            if render_consent_row(ui, row) {
                intents.push(match row.kind {
                    ConsentKind::Terms => ReviewIntent::ToggleTerms,
                    ConsentKind::Risks => ReviewIntent::ToggleRisks,
                });
            }
            ui.add_space(6.0);
        }

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(WARNING, format!("⚠ {}", view::NOTICE_TITLE));
            ui.label(view::NOTICE_BODY);
        });
        ui.add_space(12.0);

        render_footer(ui, review, &mut intents);
    });

    intents
}

fn render_stepper(ui: &mut egui::Ui, steps: &[WizardStepBadge]) {
    ui.horizontal(|ui| {
        for (index, step) in steps.iter().enumerate() {
            if index > 0 {
                ui.colored_label(ACCENT, "──");
            }
            match step.status {
                StepStatus::Completed => {
                    ui.colored_label(ACCENT, format!("✔ {}", step.label));
                }
                StepStatus::Active => {
                    ui.label(
                        egui::RichText::new(format!("({}) {}", step.number, step.label))
                            .strong()
                            .color(ACCENT),
                    );
                }
            }
        }
    });
}

fn render_summary_card(ui: &mut egui::Ui, review: &ReviewView) {
    let (r, g, b) = review.variant.accent_rgb();
    let accent = egui::Color32::from_rgb(r, g, b);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(review.variant.icon()).size(28.0).color(accent));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&review.type_label).size(18.0).strong());
                ui.colored_label(MUTED, view::CARD_SUBTITLE);
            });
        });
        ui.separator();

        egui::Grid::new("review_primary_grid")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for pair in review.primary.chunks(2) {
                    for row in pair {
                        ui.vertical(|ui| {
                            ui.colored_label(MUTED, row.label);
                            ui.label(egui::RichText::new(&row.value).size(16.0).strong());
                        });
                    }
                    ui.end_row();
                }
            });
        ui.separator();

        egui::Grid::new("review_secondary_grid")
            .num_columns(2)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for row in &review.secondary {
                    detail_row(ui, row);
                    ui.end_row();
                }
            });
    });
}

fn detail_row(ui: &mut egui::Ui, row: &DetailRow) {
    ui.colored_label(MUTED, row.label);
    if row.highlight {
        ui.label(egui::RichText::new(&row.value).strong().color(HIGHLIGHT));
    } else {
        ui.label(&row.value);
    }
}

/// The whole row is one click target, not just the indicator.
fn render_consent_row(ui: &mut egui::Ui, row: &ConsentRow) -> bool {
    let response = egui::Frame::group(ui.style())
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let mark = if row.checked {
                    egui::RichText::new("✅").color(ACCENT)
                } else {
                    egui::RichText::new("⬜").color(MUTED)
                };
                ui.add(egui::Label::new(mark.size(16.0)).selectable(false));
                ui.vertical(|ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new(row.title).strong()).selectable(false),
                    );
                    ui.add(egui::Label::new(row.description).wrap().selectable(false));
                });
            });
        })
        .response;

    response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

fn render_footer(ui: &mut egui::Ui, review: &ReviewView, intents: &mut Vec<ReviewIntent>) {
    if let Some(error) = &review.error {
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::RED, error);
            if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                intents.push(ReviewIntent::DismissError);
            }
        });
        ui.add_space(4.0);
    }

    let clicked = ui
        .horizontal(|ui| {
            if review.submit.busy {
                ui.spinner();
            }
            let icon = if review.submit.busy { "⏳" } else { "✅" };
            let button = egui::Button::new(
                egui::RichText::new(format!("{} {}", icon, review.submit.label)).size(16.0),
            )
            .min_size(egui::vec2(260.0, 40.0));
            ui.add_enabled(review.submit.enabled, button).clicked()
        })
        .inner;

    if clicked {
        intents.push(ReviewIntent::Submit);
    }

    ui.add_space(4.0);
    ui.colored_label(MUTED, format!("ⓘ {}", view::DISCLAIMER));
}
