//! Opens a URL with the platform's default handler

use std::process::Stdio;

use tokio::process::Command;

use crate::errors::{CherryprError, Result};

/// Program and leading arguments that hand a URL to the default browser
pub fn opener() -> (&'static str, &'static [&'static str]) {
    #[cfg(target_os = "macos")]
    {
        ("open", &[])
    }

    #[cfg(target_os = "windows")]
    {
        // The empty argument is the window title `start` expects first
        ("cmd", &["/C", "start", ""])
    }

    #[cfg(all(not(target_os = "macos"), not(target_os = "windows")))]
    {
        ("xdg-open", &[])
    }
}

/// Open `url` in the default browser
pub async fn open_url(url: &str) -> Result<()> {
    let (program, args) = opener();
    tracing::debug!("{} {} {}", program, args.join(" "), url);

    let output = Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| CherryprError::BrowserError(format!("failed to run {}: {}", program, e)))?;

    if output.status.success() {
        return Ok(());
    }
    Err(CherryprError::BrowserError(format!(
        "{} exited with {}: {}",
        program,
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stderr).trim()
    )))
}
