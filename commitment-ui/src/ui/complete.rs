use commitment::SubmissionReceipt;
use eframe::egui;

/// Returns true when the user asks to start another commitment.
pub fn render_complete(ui: &mut egui::Ui, receipt: &SubmissionReceipt) -> bool {
    let mut restart = false;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading("✅ Commitment Created");
        ui.add_space(8.0);
        ui.label(&receipt.type_label);
        ui.add_space(16.0);

        egui::Grid::new("receipt_grid")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label("Transaction:");
                ui.monospace(&receipt.transaction_id);
                ui.end_row();

                ui.label("Submitted at:");
                ui.label(receipt.submitted_at.to_rfc3339());
                ui.end_row();
            });

        ui.add_space(16.0);
        if ui.button("Create another commitment").clicked() {
            restart = true;
        }
    });

    restart
}
