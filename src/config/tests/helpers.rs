//! Layer builders shared by the configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::MarqueeConfig;

/// One configuration source, lowest precedence first.
#[derive(Debug, Clone)]
pub enum Layer {
    Defaults(Value),
    File(Value),
    Environment(Value),
    Cli(Value),
}

impl Layer {
    fn push_onto(self, composer: &mut MergeComposer) {
        match self {
            Self::Defaults(value) => composer.push_defaults(value),
            Self::File(value) => composer.push_file(value, None),
            Self::Environment(value) => composer.push_environment(value),
            Self::Cli(value) => composer.push_cli(value),
        }
    }
}

/// Merges `layers` in order into a [`MarqueeConfig`].
pub fn merged(layers: impl IntoIterator<Item = Layer>) -> MarqueeConfig {
    let mut composer = MergeComposer::new();
    for layer in layers {
        layer.push_onto(&mut composer);
    }

    MarqueeConfig::merge_from_layers(composer.layers())
        .unwrap_or_else(|error| panic!("layers should merge: {error}"))
}
