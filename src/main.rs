use std::io::{self, stdout};

use termsketch::{App, install_panic_handler, terminal_cleanup, terminal_setup};

fn main() -> io::Result<()> {
    // diagnostics go to stderr; only visible when RUST_LOG is set
    env_logger::init();

    terminal_setup()?;
    install_panic_handler();

    let mut app = App::new();
    let result = app.run(&mut stdout());

    terminal_cleanup()?;
    result
}
