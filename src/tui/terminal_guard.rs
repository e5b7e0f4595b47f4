//! Scoped ownership of the terminal's raw/alternate-screen mode.
//!
//! Every exit path releases the terminal exactly once: normal return drops the
//! guard, a panic goes through the hook installed by [`install_panic_hook`], and
//! SIGTERM/SIGINT go through [`install_termination_signals`].

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The two terminal transitions, split out so tests can run without a tty.
pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen, hidden cursor and, when enabled, mouse capture.
#[derive(Debug, Default)]
pub struct CrosstermTerminalOps {
    pub mouse: bool,
}

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{cursor, event, execute, terminal};

        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        if self.mouse {
            execute!(out, event::EnableMouseCapture)?;
        }
        Ok(())
    }

    /// Runs every step even after a failure and reports the first error.
    fn restore(&self) -> io::Result<()> {
        use crossterm::{cursor, event, execute, terminal};

        let mut out = io::stdout();
        let mouse = if self.mouse {
            execute!(out, event::DisableMouseCapture)
        } else {
            Ok(())
        };
        let screen = execute!(out, terminal::LeaveAlternateScreen, cursor::Show);
        let raw = terminal::disable_raw_mode();
        mouse.and(screen).and(raw)
    }
}

/// Shared handle that puts the terminal back. Clones share one "done" flag.
#[derive(Clone)]
pub struct TerminalRestorer {
    done: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    fn new(ops: Arc<dyn TerminalOps>) -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
            ops,
        }
    }

    /// Idempotent; only the first call reaches the terminal.
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }
}

/// Holds the terminal in dashboard mode until dropped.
pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new(mouse: bool) -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps { mouse }))
    }

    /// A failed setup is rolled back before the error is returned.
    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        let restorer = TerminalRestorer::new(ops);
        match restorer.ops.setup() {
            Ok(()) => Ok(Self { restorer }),
            Err(err) => {
                let _ = restorer.restore();
                Err(err)
            }
        }
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(%err, "terminal restore failed");
        }
    }
}

/// Restores the terminal before the previously installed hook prints the panic,
/// so the message lands on a cooked terminal.
pub fn install_panic_hook(restorer: TerminalRestorer) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restorer.restore();
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));
}

/// Shell convention for a process ended by signal `signo`.
pub fn signal_exit_code(signo: i32) -> i32 {
    128 + signo
}

/// The UI thread blocks in `poll_event`, so the watcher thread restores the
/// terminal and ends the process itself.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};

    let mut signals = signal_hook::iterator::Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("dockview-signals".into())
        .spawn(move || {
            if let Some(signo) = signals.forever().next() {
                tracing::info!(signo, "terminating on signal");
                let _ = restorer.restore();
                std::process::exit(signal_exit_code(signo));
            }
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
