//! rTimeline main entrypoint.

use rtimeline::run;
use rtimeline::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
