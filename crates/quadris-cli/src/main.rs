mod command;
mod controller;
mod input;
mod logging;
mod play;
mod tui;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
