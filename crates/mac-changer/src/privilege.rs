use crate::error::{MacChangerError, Result};

/// Whether the process runs with an effective uid of 0
#[cfg(unix)]
pub fn is_privileged() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_privileged() -> bool {
    false
}

/// Capability check performed once, before any address change
pub fn ensure_privileged() -> Result<()> {
    if is_privileged() {
        Ok(())
    } else {
        Err(MacChangerError::PermissionDenied)
    }
}
