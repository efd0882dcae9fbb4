//! Logging targets and macros shared between the library and the binary.
//!
//! Everything goes through `tracing`; the binary's formatter decides how each target is drawn.

#[doc(hidden)]
pub use tracing as __tracing;

/// Target for plain program output (patterns, match verdicts). Rendered without a status symbol.
pub const PRINT_TARGET: &str = "cidrex::print";

/// Target for positive outcomes such as a successful match.
pub const SUCCESS_TARGET: &str = "cidrex::success";

/// Logs a positive outcome at `INFO` under [`SUCCESS_TARGET`].
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::log::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)+)
    };
}

/// Emits one line of plain program output under [`PRINT_TARGET`].
#[macro_export]
macro_rules! output {
    () => {
        $crate::log::__tracing::info!(target: $crate::log::PRINT_TARGET, "")
    };
    ($($arg:tt)+) => {
        $crate::log::__tracing::info!(target: $crate::log::PRINT_TARGET, $($arg)+)
    };
}
