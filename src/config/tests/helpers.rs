//! Layer builders for almanac configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::AlmanacConfig;

/// Where a configuration layer comes from, lowest precedence first.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    /// Built-in defaults.
    Defaults,
    /// `.almanac.toml` or `almanac.toml`.
    File,
    /// `ALMANAC_*` environment variables.
    Environment,
    /// Command-line flags.
    Cli,
}

/// Merges `(source, value)` layers into an [`AlmanacConfig`] in order.
pub fn merge_sources(layers: &[(Source, Value)]) -> AlmanacConfig {
    let mut composer = MergeComposer::new();

    for (source, value) in layers {
        let layer = value.clone();
        match source {
            Source::Defaults => composer.push_defaults(layer),
            Source::File => composer.push_file(layer, None),
            Source::Environment => composer.push_environment(layer),
            Source::Cli => composer.push_cli(layer),
        }
    }

    AlmanacConfig::merge_from_layers(composer.layers())
        .expect("almanac layers should merge into a config")
}
