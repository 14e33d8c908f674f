use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::card_rendering::{render_counting, render_elapsed};
use crate::models::settings::Settings;
use crate::services::countdown::{DisplayState, RefreshHandle};

const WINDOW_SIZE: [f32; 2] = [880.0, 540.0];
const MIN_WINDOW_SIZE: [f32; 2] = [520.0, 340.0];

/// Window showing the shared display cell.
///
/// The app owns the driver handle, so closing the window stops the tick.
pub struct CountdownApp {
    settings: Settings,
    states: watch::Receiver<DisplayState>,
    repaint_task: JoinHandle<()>,
    driver: RefreshHandle,
}

impl CountdownApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        driver: RefreshHandle,
        runtime: &tokio::runtime::Handle,
    ) -> Self {
        // egui only repaints on input; wake it whenever the cell changes.
        let ctx = cc.egui_ctx.clone();
        let mut wake = driver.subscribe();
        let repaint_task = runtime.spawn(async move {
            while wake.changed().await.is_ok() {
                ctx.request_repaint();
            }
        });

        Self {
            settings,
            states: driver.subscribe(),
            repaint_task,
            driver,
        }
    }
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = *self.states.borrow_and_update();

        egui::CentralPanel::default().show(ctx, |ui| match state {
            DisplayState::Counting(remaining) => render_counting(ui, &self.settings, &remaining),
            DisplayState::Elapsed => render_elapsed(ui, &self.settings),
        });
    }
}

impl Drop for CountdownApp {
    fn drop(&mut self) {
        self.repaint_task.abort();
        self.driver.stop();
    }
}

/// Open the countdown window and block until it is closed.
pub fn run_window(
    settings: Settings,
    driver: RefreshHandle,
    runtime: tokio::runtime::Handle,
) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.title.clone())
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    let app_name = settings.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(CountdownApp::new(cc, settings, driver, &runtime)))),
    )
    .map_err(|err| anyhow::anyhow!("countdown window failed: {err}"))
}
