use eframe::egui;
use std::sync::Arc;

use commitment::{Config, ReviewInput, ReviewView, SimulatedSubmitter};

use crate::ui::{complete, render_review_step, ReviewIntent};
use crate::wasm_utils;
use crate::wizard::{CommitmentWizardManager, WizardAction, WizardStep};

/// Commitment creation wizard hosting the review step
pub struct CommitmentApp {
    manager: CommitmentWizardManager,
    app_name: String,
}

impl CommitmentApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config, input: ReviewInput) -> Self {
        wasm_utils::set_panic_hook();
        wasm_utils::console_log("🚀 Starting commitment wizard");

        let submitter = SimulatedSubmitter::new(config.submission.clone());

        Self {
            manager: CommitmentWizardManager::new(input, Arc::new(submitter)),
            app_name: config.application.name,
        }
    }
}

impl eframe::App for CommitmentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.manager.update_from_async();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.app_name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.manager.state().is_submitting() {
                        ui.spinner();
                        ui.label("Waiting for confirmation...");
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.manager.state().current_step {
            WizardStep::Configure => self.render_configure(ui),
            WizardStep::Review => self.render_review(ui),
            WizardStep::Complete => self.render_complete(ui),
        });

        // Actions dispatched while rendering change what the next frame shows
        let dispatched = self.manager.has_pending_work();
        self.manager.update();

        if dispatched || self.manager.has_pending_work() {
            ctx.request_repaint();
        }
    }
}

impl CommitmentApp {
    /// Read-only stand-in for the earlier type/configure steps.
    fn render_configure(&mut self, ui: &mut egui::Ui) {
        let input = &self.manager.state().input;
        let mut continue_clicked = false;

        ui.heading("Configure");
        ui.label("Values carried over from the configuration step:");
        ui.add_space(8.0);

        egui::Grid::new("configure_grid")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label("Type:");
                ui.label(&input.type_label);
                ui.end_row();

                ui.label("Amount:");
                ui.label(input.amount_display());
                ui.end_row();

                ui.label("Duration:");
                ui.label(input.duration_display());
                ui.end_row();

                ui.label("Max loss:");
                ui.label(input.max_loss_display());
                ui.end_row();
            });

        ui.add_space(12.0);
        if ui.button("Continue to review ➡").clicked() {
            continue_clicked = true;
        }

        if continue_clicked {
            self.manager.dispatch(WizardAction::EnterReview);
        }
    }

    fn render_review(&mut self, ui: &mut egui::Ui) {
        let state = self.manager.state();
        let Some(review) = &state.review else {
            return;
        };

        let view = ReviewView::build(review.input(), review.consent(), &state.signals());
        for intent in render_review_step(ui, &view) {
            self.manager.dispatch(match intent {
                ReviewIntent::Back => WizardAction::GoBack,
                ReviewIntent::ToggleTerms => WizardAction::ToggleTerms,
                ReviewIntent::ToggleRisks => WizardAction::ToggleRisks,
                ReviewIntent::Submit => WizardAction::Submit,
                ReviewIntent::DismissError => WizardAction::DismissError,
            });
        }
    }

    fn render_complete(&mut self, ui: &mut egui::Ui) {
        let restart = match self.manager.state().receipt() {
            Some(receipt) => complete::render_complete(ui, receipt),
            None => false,
        };

        if restart {
            self.manager.dispatch(WizardAction::Reset);
        }
    }
}
