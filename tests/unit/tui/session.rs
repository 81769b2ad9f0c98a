use std::io;
use std::sync::{Arc, Mutex};

use super::*;

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<&'static str>>,
    fail_enter: bool,
    fail_leave: bool,
}

impl Recorder {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl ScreenMode for Recorder {
    fn enter(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("enter");
        if self.fail_enter {
            return Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        }
        Ok(())
    }

    fn leave(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("leave");
        if self.fail_leave {
            return Err(io::Error::new(io::ErrorKind::Other, "stdout closed"));
        }
        Ok(())
    }
}

#[test]
fn dropping_a_session_leaves_the_screen() {
    let mode = Arc::new(Recorder::default());
    {
        let _session = Session::enter(mode.clone()).unwrap();
    }
    assert_eq!(mode.calls(), ["enter", "leave"]);
}

#[test]
fn exit_handles_share_one_leave() {
    let mode = Arc::new(Recorder::default());
    let session = Session::enter(mode.clone()).unwrap();
    let handle = session.exit_handle();
    assert!(!handle.has_left());

    handle.leave().unwrap();
    handle.clone().leave().unwrap();
    session.finish().unwrap();

    assert!(handle.has_left());
    assert_eq!(mode.calls(), ["enter", "leave"]);
}

#[test]
fn finish_reports_a_failed_restore_once() {
    let mode = Arc::new(Recorder {
        fail_leave: true,
        ..Recorder::default()
    });
    let session = Session::enter(mode.clone()).unwrap();

    assert!(session.finish().is_err());
    assert_eq!(mode.calls(), ["enter", "leave"]);
}

#[test]
fn failed_enter_never_leaves() {
    let mode = Arc::new(Recorder {
        fail_enter: true,
        ..Recorder::default()
    });
    assert!(Session::enter(mode.clone()).is_err());
    assert_eq!(mode.calls(), ["enter"]);
}

#[cfg(unix)]
#[test]
fn signal_exit_codes_follow_shell_convention() {
    use signal_hook::consts::{SIGINT, SIGTERM};

    assert_eq!(signal_exit_code(SIGINT), 130);
    assert_eq!(signal_exit_code(SIGTERM), 143);
}
