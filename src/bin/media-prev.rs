use std::process::ExitCode;

use waybar_media::report::{self, Variant};

fn main() -> ExitCode {
    report::run(Variant::Previous)
}
