#[derive(Debug)]
pub enum AppEvent {
    /// Command line read from stdin
    Command(String),

    /// Periodic status refresh
    Tick,

    /// A loading-region flag changed
    RegionsChanged,

    /// Ctrl-C
    Quit,
}
