use std::{
    io::{self, Write},
    process::ExitCode,
};

use crate::{cmd, logging, state::State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Play/pause button: glyph follows the playback status.
    Playback,
    /// Previous-track button: fixed glyph.
    Previous,
}

pub fn report(variant: Variant) -> State {
    match variant {
        Variant::Playback => {
            let status = cmd::query(&mut cmd::status_cmd());
            let metadata = cmd::query(&mut cmd::metadata_cmd());
            log::debug!("status={:?} metadata={:?}", status, metadata);
            State::playback(&status, &metadata)
        }
        Variant::Previous => {
            let metadata = cmd::query(&mut cmd::metadata_cmd());
            log::debug!("metadata={:?}", metadata);
            State::previous(&metadata)
        }
    }
}

pub fn emit<W: Write>(state: &State, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", state.to_json())?;
    out.flush()
}

/// Entry point shared by both binaries. Always succeeds so the bar never
/// sees a failing module.
pub fn run(variant: Variant) -> ExitCode {
    logging::init();

    let state = report(variant);
    if let Err(reason) = emit(&state, &mut io::stdout().lock()) {
        log::error!("couldnt write to stdout: {}", reason);
    }

    ExitCode::SUCCESS
}
