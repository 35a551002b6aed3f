mod app;
mod config;
mod library;
mod logging;
mod mpris;
mod player;
mod runtime;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
