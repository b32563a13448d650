use std::fmt;

/// Exit status used when the user aborts the prompt.
pub const INTERRUPT_EXIT_CODE: i32 = 3;

/// The user stopped the interaction, either with Ctrl-C or by closing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl fmt::Display for Interrupted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interrupted by user")
    }
}

impl std::error::Error for Interrupted {}

#[cfg(unix)]
pub fn install_interrupt_handler() {
    unsafe {
        libc::signal(libc::SIGINT, handle_sigint as libc::sighandler_t);
    }
}

#[cfg(not(unix))]
pub fn install_interrupt_handler() {}

#[cfg(unix)]
extern "C" fn handle_sigint(_: libc::c_int) {
    // Only async-signal-safe calls are allowed here.
    unsafe { libc::_exit(INTERRUPT_EXIT_CODE) }
}

/// Returns true when `err` carries an [`Interrupted`] anywhere in its chain.
pub fn is_interrupt(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<Interrupted>())
}
