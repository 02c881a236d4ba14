//! Rendering options

/// Options controlling how nodes are rendered back to constraint text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Annotate output for debugging: append `/declsize` to every slice,
    /// mark whole segments with `*` and always print their slices.
    ///
    /// Verbose output is not valid constraint syntax.
    pub verbose: bool,
}

impl RenderOptions {
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}
