/// Result of handling input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
    /// Forward action on the success screen ("Go to Dashboard").
    Complete,
}
