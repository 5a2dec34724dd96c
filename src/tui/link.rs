//! Hands outbound URLs to the platform opener.
//!
//! The URL is passed through as-is: no fetching, no validation. The opener
//! runs detached so the UI never waits on the browser.

use log::{debug, info};
use std::io;
use std::process::{Command, Stdio};

pub fn open(url: &str) -> io::Result<()> {
    let mut command = opener_command(url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    debug!("Launching opener: {:?}", command);
    let mut child = command.spawn()?;
    info!("Opened {} (pid {})", url, child.id());
    // Reap the opener once it exits
    std::thread::spawn(move || {
        let _ = child.wait();
    });
    Ok(())
}

fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        // The empty string is the window title `start` expects first
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}
