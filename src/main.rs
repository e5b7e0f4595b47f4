use dockview::app::Dashboard;
use dockview::error::AppError;
use dockview::services::{load_settings, ContainerSource, DockerSource};
use dockview::tui::terminal_guard::{install_panic_hook, TerminalGuard};
use dockview::ui::backend::terminal::TerminalSurface;
use dockview::ui::core::style::Styles;
use std::io;
use std::process::ExitCode;

mod logging;

fn main() -> ExitCode {
    let logging = logging::init();

    match run() {
        Ok(()) => {
            tracing::info!("exited cleanly");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "fatal");
            eprintln!("dockview: {}", err);
            if let Some(logging) = &logging {
                eprintln!("logs: {}", logging.log_dir().display());
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let settings = load_settings()?;

    // Query before touching the terminal so engine errors print on a normal screen.
    let containers = DockerSource::from_settings(&settings).list_containers()?;

    let guard = TerminalGuard::new(settings.enable_mouse)?;
    install_panic_hook(guard.restorer());
    #[cfg(unix)]
    let _signals = dockview::tui::terminal_guard::install_termination_signals(guard.restorer())?;

    let surface = TerminalSurface::new(io::stdout())?;
    let mut dashboard = Dashboard::new(surface, Styles::default(), containers);
    let result = dashboard.run();

    drop(dashboard);
    drop(guard);
    result.map_err(AppError::from)
}
