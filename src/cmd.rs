use std::{
    process::{Command, ExitStatus, Stdio},
    string::FromUtf8Error,
};

pub const PLAYERCTL: &str = "playerctl";
pub const METADATA_FORMAT: &str = "{{artist}} - {{title}}";

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("couldnt run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Exit { program: String, status: ExitStatus },

    #[error("{program} printed invalid utf-8: {source}")]
    Decode {
        program: String,
        #[source]
        source: FromUtf8Error,
    },
}

pub fn playerctl_cmd(args: &[&str]) -> Command {
    let mut cmd = Command::new(PLAYERCTL);
    cmd.args(args);
    cmd
}

pub fn status_cmd() -> Command {
    playerctl_cmd(&["status"])
}

pub fn metadata_cmd() -> Command {
    playerctl_cmd(&["metadata", "--format", METADATA_FORMAT])
}

/// Runs `cmd` to completion and returns its trimmed stdout.
pub fn run(cmd: &mut Command) -> Result<String, CmdError> {
    let program = cmd.get_program().to_string_lossy().into_owned();

    let output = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .map_err(|source| CmdError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(CmdError::Exit {
            program,
            status: output.status,
        });
    }

    let stdout =
        String::from_utf8(output.stdout).map_err(|source| CmdError::Decode { program, source })?;
    Ok(stdout.trim().to_string())
}

/// Like [`run`], but any failure becomes an empty string.
pub fn query(cmd: &mut Command) -> String {
    match run(cmd) {
        Ok(out) => out,
        Err(reason) => {
            log::debug!("{}", reason);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(cmd: &Command) -> Vec<String> {
        cmd.get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn builds_status_query() {
        let cmd = status_cmd();
        assert_eq!(cmd.get_program(), PLAYERCTL);
        assert_eq!(args_of(&cmd), ["status"]);
    }

    #[test]
    fn builds_metadata_query() {
        let cmd = metadata_cmd();
        assert_eq!(cmd.get_program(), PLAYERCTL);
        assert_eq!(
            args_of(&cmd),
            ["metadata", "--format", "{{artist}} - {{title}}"]
        );
    }

    #[test]
    fn missing_binary_is_spawn_error() {
        let mut cmd = Command::new("definitely-not-a-real-playerctl-binary");
        let err = run(&mut cmd).unwrap_err();
        assert!(matches!(err, CmdError::Spawn { .. }));
        assert_eq!(query(&mut cmd), "");
    }

    #[cfg(unix)]
    #[test]
    fn trims_stdout() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "printf '  Playing\\n\\n'"]);
        assert_eq!(run(&mut cmd).unwrap(), "Playing");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_error_even_with_output() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "echo Playing; exit 1"]);
        assert!(matches!(run(&mut cmd), Err(CmdError::Exit { .. })));
        assert_eq!(query(&mut cmd), "");
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_is_decode_error() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "printf '\\377\\376'"]);
        assert!(matches!(run(&mut cmd), Err(CmdError::Decode { .. })));
        assert_eq!(query(&mut cmd), "");
    }
}
