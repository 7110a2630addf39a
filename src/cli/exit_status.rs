use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): the scan completed, whether or not anything was captured
/// - `Error` (2): the scan could not run or was aborted (bad root, undecodable
///   file, unreadable config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed.
    Success,
    /// Scan failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
