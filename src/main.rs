//! main.rs
//! Entry point for lister

use lister_tui::app::Application;
use lister_tui::config::Config;
use lister_tui::utils::cli::{CliAction, handle_args};
use lister_tui::utils::{expand_home_path, logging};

use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stdout = std::io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::event::DisableMouseCapture,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[lister] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let target: Option<PathBuf> = match handle_args() {
        CliAction::Exit => return Ok(()),
        CliAction::RunApp => None,
        // A missing directory still opens the UI; the scan logs why it is empty
        CliAction::RunAppAtPath(path_arg) => Some(expand_home_path(&path_arg)),
    };

    let config = Config::load();

    let _log_guard = match logging::init(config.general()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("[lister] Error: {}", e);
            std::process::exit(1);
        }
    };

    Application::new(config, target).run()
}
