//! Owning the terminal for the length of a `walk`.
//!
//! Starting a session puts the terminal in raw mode on the alternate screen
//! with the cursor hidden. Leaving undoes that exactly once, from whichever
//! path gets there first: the session finishing or dropping, a panic, or
//! SIGINT/SIGTERM.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

/// The two terminal transitions a session makes.
pub trait ScreenMode: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen and a hidden cursor.
#[derive(Debug, Default)]
pub struct FullScreen;

impl ScreenMode for FullScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
        use crossterm::{cursor, execute};

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};
        use crossterm::{cursor, execute};

        // Both steps always run; the first failure is reported.
        let raw = disable_raw_mode();
        let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        raw.and(screen)
    }
}

/// Leaves the session's screen mode. Clones share one flag, so only the
/// first call does anything.
#[derive(Clone)]
pub struct ExitHandle {
    left: Arc<AtomicBool>,
    mode: Arc<dyn ScreenMode>,
}

impl ExitHandle {
    pub fn leave(&self) -> io::Result<()> {
        if self.left.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.mode.leave()
    }

    pub fn has_left(&self) -> bool {
        self.left.load(Ordering::SeqCst)
    }
}

pub struct Session {
    exit: ExitHandle,
}

impl Session {
    /// Enters full screen and arranges to leave it on panic and on
    /// termination signals as well as when the session ends.
    pub fn start() -> io::Result<Self> {
        let session = Self::enter(Arc::new(FullScreen))?;
        leave_on_panic(session.exit_handle());
        #[cfg(unix)]
        leave_on_signals(session.exit_handle())?;
        Ok(session)
    }

    /// Enters `mode` without installing any hooks.
    pub fn enter(mode: Arc<dyn ScreenMode>) -> io::Result<Self> {
        mode.enter()?;
        info!("terminal session started");
        Ok(Self {
            exit: ExitHandle {
                left: Arc::new(AtomicBool::new(false)),
                mode,
            },
        })
    }

    pub fn exit_handle(&self) -> ExitHandle {
        self.exit.clone()
    }

    /// Leaves the screen mode and reports a failure that dropping would only log.
    pub fn finish(self) -> io::Result<()> {
        self.exit.leave()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(err) = self.exit.leave() {
            warn!(%err, "terminal restore failed");
        }
    }
}

/// Restores the screen before the panic message prints, so it lands on the
/// normal screen.
fn leave_on_panic(exit: ExitHandle) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = exit.leave();
        previous(info);
    }));
}

/// Exit status of a process ended by `signal`, the way shells report it.
pub fn signal_exit_code(signal: i32) -> i32 {
    128 + signal
}

/// The run loop blocks on input, so the signal thread restores the screen
/// and exits the process itself.
#[cfg(unix)]
fn leave_on_signals(exit: ExitHandle) -> io::Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            info!(signal, "terminating on signal");
            let _ = exit.leave();
            std::process::exit(signal_exit_code(signal));
        }
    });
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/tui/session.rs"]
mod tests;
