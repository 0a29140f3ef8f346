#[cfg(feature = "cli")]
pub mod cli;
pub mod defaults;
pub mod template;

/// Which built-in envelope and naming rule a run starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeProfile {
    /// Numbered `01-`..`11-` modules, three variables, global event scripts.
    Full,
    /// Every `*.json` module, `base_url` only, no event scripts.
    Quick,
}
