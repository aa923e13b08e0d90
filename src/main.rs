//! tictrack main entrypoint.

use tictrack::run;
use tictrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
