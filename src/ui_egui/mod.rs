// egui display for the countdown

mod app;
mod card_rendering;

pub use app::{run_window, CountdownApp};
