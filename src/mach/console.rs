use std::io;

/// Terminal seam for statement execution. PRINT and INPUT reach
/// the outside world only through this trait, so tests can swap
/// the real terminal for a scripted one.
pub trait Console {
    /// Emit one line of output. Implementations add the line ending.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Block for a reply to `prompt`. `None` means the input
    /// source is exhausted.
    fn input(&mut self, prompt: &str) -> io::Result<Option<String>>;
}
