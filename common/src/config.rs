/// Settings shared by every `cidrex` command.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Quiet level. `1` hides headers, `2` also hides the echoed input.
    pub quiet: u8,
    /// Prints patterns wrapped in `^(?:...)$`.
    ///
    /// Compiled matchers are always anchored; this only affects what gets printed.
    pub anchored: bool,
}

impl Config {
    /// Renders `pattern` the way this configuration wants it shown.
    pub fn display_pattern(&self, pattern: &str) -> String {
        if self.anchored {
            format!("^(?:{pattern})$")
        } else {
            pattern.to_string()
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
