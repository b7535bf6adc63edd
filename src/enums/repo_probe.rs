/// Why the repo-info endpoint is being probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoProbe {
    /// First probe when the modal opens; a miss falls through to the status probe.
    Entry,
    /// Re-read after a repository was created; a miss is reported to the user.
    Refresh,
}
