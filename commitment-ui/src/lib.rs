#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod app;
pub mod ui;
pub mod wasm_utils;
pub mod wizard;

pub use app::CommitmentApp;

/// WASM entry point for the commitment wizard
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), wasm_bindgen::JsValue> {
    // No filesystem or environment in the browser
    let config = commitment::Config::default();
    let level = config
        .application
        .log_level()
        .parse::<log::LevelFilter>()
        .unwrap_or(log::LevelFilter::Info);
    eframe::WebLogger::init(level).ok();

    let web_options = eframe::WebOptions::default();
    let canvas_id = canvas_id.to_string();

    wasm_utils::spawn_async(async move {
        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&canvas_id))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            wasm_utils::console_log(&format!("❌ Canvas element '{}' not found", canvas_id));
            return;
        };

        let dark_mode = config.ui.dark_mode;

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    if dark_mode {
                        cc.egui_ctx.set_visuals(egui::Visuals::dark());
                    }
                    Ok(Box::new(CommitmentApp::new(
                        cc,
                        config,
                        commitment::ReviewInput::demo(),
                    )))
                }),
            )
            .await;

        if let Some(loading_text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("loading_text"))
        {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    wasm_utils::console_log(&format!("❌ Failed to start eframe: {e:?}"));
                }
            }
        }
    });

    Ok(())
}
