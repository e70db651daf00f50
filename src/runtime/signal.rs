//! Signal relaying while the delegate runs.
//!
//! Terminal interrupts (`SIGINT`, `SIGQUIT`) already reach the delegate
//! through the foreground process group, so the launcher swallows them and
//! waits for the delegate to decide. `SIGTERM` and `SIGHUP` sent to the
//! launcher alone are forwarded to the delegate.

use log::warn;
use nix::libc::c_int;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::unistd::Pid;
use std::sync::atomic::{AtomicI32, Ordering};

static CHILD_PID: AtomicI32 = AtomicI32::new(0);

const SWALLOWED: [Signal; 2] = [Signal::SIGINT, Signal::SIGQUIT];
const FORWARDED: [Signal; 2] = [Signal::SIGTERM, Signal::SIGHUP];

extern "C" fn swallow(_: c_int) {}

extern "C" fn forward(signum: c_int) {
    forward_to(CHILD_PID.load(Ordering::SeqCst), signum);
}

fn forward_to(pid: i32, signum: c_int) {
    // kill(0) would hit our own process group
    if pid <= 0 {
        return;
    }
    if let Ok(sig) = Signal::try_from(signum) {
        let _ = signal::kill(Pid::from_raw(pid), sig);
    }
}

/// Installed handlers; the previous dispositions come back on drop.
pub(crate) struct SignalRelay {
    child_pid: &'static AtomicI32,
    previous: Vec<(Signal, SigAction)>,
}

impl SignalRelay {
    pub(crate) fn install(child_pid: u32) -> Self {
        CHILD_PID.store(child_pid as i32, Ordering::SeqCst);

        let handlers = SWALLOWED
            .iter()
            .map(|sig| (*sig, swallow as extern "C" fn(c_int)))
            .chain(
                FORWARDED
                    .iter()
                    .map(|sig| (*sig, forward as extern "C" fn(c_int))),
            );

        let mut previous = Vec::new();
        for (sig, handler) in handlers {
            let action = SigAction::new(
                SigHandler::Handler(handler),
                SaFlags::SA_RESTART,
                SigSet::empty(),
            );
            // SAFETY: the handlers only read an atomic and call kill(2),
            // both async-signal-safe.
            match unsafe { signal::sigaction(sig, &action) } {
                Ok(old) => previous.push((sig, old)),
                Err(err) => warn!("Could not install {} handler: {}", sig, err),
            }
        }

        Self {
            child_pid: &CHILD_PID,
            previous,
        }
    }
}

impl Drop for SignalRelay {
    fn drop(&mut self) {
        // Clear first so a late SIGTERM cannot reach a recycled pid
        self.child_pid.store(0, Ordering::SeqCst);
        for (sig, old) in self.previous.drain(..) {
            // SAFETY: restores a disposition previously returned by sigaction.
            if let Err(err) = unsafe { signal::sigaction(sig, &old) } {
                warn!("Could not restore {} handler: {}", sig, err);
            }
        }
    }
}
