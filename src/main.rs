//! uarg demo - universal-argument repeat on a scratch buffer
//! Main entry point

use uarg::demo::Demo;
use uarg::term::crossterm::CrosstermBackend;

fn main() {
    // Create terminal backend
    let backend = match CrosstermBackend::new() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to create terminal backend: {}", e);
            std::process::exit(1);
        }
    };

    // Create demo app
    let mut demo = match Demo::new(backend) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to initialize demo: {}", e);
            std::process::exit(1);
        }
    };

    // Run demo
    if let Err(e) = demo.run() {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}
