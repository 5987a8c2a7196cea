//! A font foundry catalog served from Rust.
//!
//! Type is a beautiful group of letters, not a group of beautiful letters.
//! — Matthew Carter

use fontshelf::core;

fn main() {
    core::platform::init_panic_handling();
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
