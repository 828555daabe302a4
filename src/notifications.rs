/// Desktop notifications
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when the stop-working cue turns on
pub fn notify_shutdown(message: &str) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Weekboard - Time to Stop""#,
            message.replace('"', "\\\"")
        );

        if let Err(e) = Command::new("osascript").arg("-e").arg(&script).output() {
            tracing::debug!(error = %e, "failed to send notification");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = message;
    }
}
