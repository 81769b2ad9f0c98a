use std::io;

use tracing::info;

use super::session::Session;
use crate::config::Config;
use crate::error::Result;
use crate::ui::app::App;
use crate::ui::backend::terminal::TerminalBackend;
use crate::ui::core::widget::Control;

const ESC_DELAY_VAR: &str = "ESCDELAY";

/// Shortens the wait after a bare Esc so it is not mistaken for the start of
/// an escape sequence. An `ESCDELAY` already in the environment wins.
///
/// `ESCDELAY` is an ncurses variable. crossterm never reads it, so this only
/// matters for backends or child programs that honor it.
pub fn reduce_esc_delay(delay_ms: u32) {
    if std::env::var_os(ESC_DELAY_VAR).is_none() {
        std::env::set_var(ESC_DELAY_VAR, delay_ms.to_string());
    }
}

/// Runs `root` full screen until the App exits and hands the App back so the
/// caller can read the final control values.
pub fn walk(root: impl Control + 'static) -> Result<App> {
    walk_with_config(root, Config::default())
}

pub fn walk_with_config(root: impl Control + 'static, config: Config) -> Result<App> {
    reduce_esc_delay(config.esc_delay_ms);

    let session = Session::start()?;
    let mut backend = TerminalBackend::new(io::stdout())?;
    let mut app = App::with_config(root, config);
    info!("ui started");
    let result = app.run(&mut backend);
    let restored = session.finish();
    result?;
    restored?;
    Ok(app)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/bootstrap.rs"]
mod tests;
