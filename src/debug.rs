//! Process-wide diagnostics switch.
//!
//! When enabled, faults recorded on arrays carry a short description of the
//! offending shapes or indices (see [`ArrayError::context`]). It is disabled
//! by default since building the text costs an allocation per fault.
//!
//! The initial value is read once from the environment variable
//! `NDBUF_DEBUG` (`1`, `true`, `yes` or `on` enable it); [`set_enabled`]
//! overrides it for the rest of the process.
//!
//! [`ArrayError::context`]: crate::ArrayError::context

use std::sync::atomic::{AtomicU8, Ordering};

/// Name of the environment variable holding the initial value.
pub const ENV_VAR: &str = "NDBUF_DEBUG";

const UNSET: u8 = 0;
const OFF: u8 = 1;
const ON: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNSET);

/// Return `true` if fault diagnostics are captured.
#[inline]
pub fn is_enabled() -> bool {
    match STATE.load(Ordering::Relaxed) {
        ON => true,
        OFF => false,
        _ => {
            let initial = if from_env() { ON } else { OFF };
            // a concurrent set_enabled wins over the environment
            let _ = STATE.compare_exchange(UNSET, initial, Ordering::Relaxed, Ordering::Relaxed);
            STATE.load(Ordering::Relaxed) == ON
        }
    }
}

/// Enable or disable fault diagnostics for the whole process.
pub fn set_enabled(enabled: bool) {
    STATE.store(if enabled { ON } else { OFF }, Ordering::Relaxed);
}

fn from_env() -> bool {
    std::env::var(ENV_VAR)
        .map(|value| parse_flag(&value))
        .unwrap_or(false)
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
