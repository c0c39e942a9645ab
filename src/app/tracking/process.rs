use std::process::{Command as ProcessCommand, ExitStatus};

use anyhow::{Context, Result};

/// Keeps this process alive through Ctrl-C while the guard lives, so the
/// position VLC writes on exit can still be recorded. The previous
/// disposition comes back on drop.
#[cfg(unix)]
pub(crate) struct InterruptShield {
    signum: libc::c_int,
    previous: libc::sigaction,
}

#[cfg(unix)]
impl InterruptShield {
    pub(crate) fn raise() -> Result<Self> {
        Self::for_signal(libc::SIGINT)
    }

    pub(crate) fn for_signal(signum: libc::c_int) -> Result<Self> {
        let mut previous: libc::sigaction = unsafe { std::mem::zeroed() };
        let installed = unsafe {
            let mut ignore: libc::sigaction = std::mem::zeroed();
            ignore.sa_sigaction = libc::SIG_IGN;
            libc::sigemptyset(&mut ignore.sa_mask);
            libc::sigaction(signum, &ignore, &mut previous) == 0
        };
        if !installed {
            return Err(std::io::Error::last_os_error())
                .with_context(|| format!("failed to ignore signal {signum}"));
        }
        Ok(Self { signum, previous })
    }
}

#[cfg(unix)]
impl Drop for InterruptShield {
    fn drop(&mut self) {
        unsafe {
            libc::sigaction(self.signum, &self.previous, std::ptr::null_mut());
        }
    }
}

/// Spawns the player and blocks until it exits.
///
/// The shield goes up only after the spawn, so the player starts with the
/// default SIGINT handling and is the one that quits on Ctrl-C.
pub(crate) fn wait_for_player(mut cmd: ProcessCommand) -> Result<ExitStatus> {
    let mut child = cmd.spawn().context("failed to spawn player")?;
    #[cfg(unix)]
    let _shield = match InterruptShield::raise() {
        Ok(shield) => Some(shield),
        Err(err) => {
            log::debug!("Ctrl-C will also stop this process: {err:#}");
            None
        }
    };
    child.wait().context("failed waiting on player")
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn current_handler(signum: libc::c_int) -> libc::sighandler_t {
        unsafe {
            let mut current: libc::sigaction = std::mem::zeroed();
            libc::sigaction(signum, std::ptr::null(), &mut current);
            current.sa_sigaction
        }
    }

    #[test]
    fn shield_ignores_signal_and_restores_previous_handler() {
        // SIGUSR2 is not touched by anything else in the test binary.
        let before = current_handler(libc::SIGUSR2);
        {
            let _shield =
                InterruptShield::for_signal(libc::SIGUSR2).expect("shield should install");
            assert_eq!(current_handler(libc::SIGUSR2), libc::SIG_IGN);
        }
        assert_eq!(current_handler(libc::SIGUSR2), before);
    }

    #[test]
    fn shield_rejects_invalid_signal() {
        assert!(InterruptShield::for_signal(-1).is_err());
    }

    #[test]
    fn player_exit_status_is_returned() {
        let status = wait_for_player(ProcessCommand::new("false")).expect("false should spawn");
        assert!(!status.success());
    }
}
