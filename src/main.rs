// folioterm: a single-page terminal portfolio

mod backdrop;
mod content;
mod launch;
mod page;
mod reveal;
mod ui;

use std::io;
use std::path::PathBuf;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use ui::{App, AppConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("folioterm");

    let mut config = AppConfig::default();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--still" => config.animate_backdrop = false,
            "--resume" => match iter.next() {
                Some(path) => config.resume_path = PathBuf::from(path),
                None => {
                    eprintln!("Error: --resume requires a path");
                    usage(program_name);
                    std::process::exit(1);
                }
            },
            "-h" | "--help" => {
                usage(program_name);
                return Ok(());
            }
            other => {
                eprintln!("Error: Unknown option '{}'", other);
                eprintln!();
                usage(program_name);
                std::process::exit(1);
            }
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn usage(program_name: &str) {
    eprintln!("Usage: {} [--still] [--resume <path>]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --still           Freeze the hero backdrop (reduced motion)");
    eprintln!("  --resume <path>   Where 'r' exports the plain-text resume");
    eprintln!("                    (default: Ari_R_Resume.txt)");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  arrows/PgUp/PgDn/Space  scroll    1-9  jump to section");
    eprintln!("  g/l/m  GitHub / LinkedIn / email  r    export resume");
    eprintln!("  o 1-4  open a project repository  q    quit");
    eprintln!("  Enter  message form (on contact)");
}
