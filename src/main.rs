use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

mod components;
mod config;
mod model;
mod pages;
mod routes;
mod state;
mod util;

use components::App;

fn main() {
    console_error_panic_hook::set_once();

    // Route tracing output to the browser console.
    let filter = EnvFilter::new("info");
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
