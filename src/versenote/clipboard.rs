use crate::error::{Result, VerseError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses wl-copy, xclip or xsel, whichever is installed
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let candidates = clipboard_commands();
    if candidates.is_empty() {
        return Err(VerseError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ));
    }

    let mut last_error = String::new();
    for &(program, args) in candidates {
        match pipe_to(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_error = e,
        }
    }
    Err(VerseError::Clipboard(last_error))
}

type ClipboardCommand = (&'static str, &'static [&'static str]);

const MACOS: &[ClipboardCommand] = &[("pbcopy", &[])];
const WINDOWS: &[ClipboardCommand] = &[("clip", &[])];
const LINUX: &[ClipboardCommand] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

fn clipboard_commands() -> &'static [ClipboardCommand] {
    if cfg!(target_os = "macos") {
        MACOS
    } else if cfg!(target_os = "windows") {
        WINDOWS
    } else if cfg!(target_os = "linux") {
        LINUX
    } else {
        &[]
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> std::result::Result<(), String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("Failed to spawn {}: {}", program, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| format!("Failed to write to {}: {}", program, e))?;
    }

    let status = child
        .wait()
        .map_err(|e| format!("Failed to wait for {}: {}", program, e))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("{} exited with error", program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_error_not_a_panic() {
        let err = pipe_to("versenote-no-such-clipboard-tool", &[], "text").unwrap_err();
        assert!(err.contains("Failed to spawn"));
    }

    #[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
    #[test]
    fn supported_platforms_have_candidates() {
        assert!(!clipboard_commands().is_empty());
    }
}
