//! Tests for configuration consistency validation.

use rstest::rstest;

use crate::MarqueeConfig;
use crate::catalogue::CatalogueError;

#[rstest]
fn default_configuration_is_valid() {
    let _guard = env_lock::lock_env([(crate::config::LEGACY_API_URL_ENV, None::<&str>)]);
    let config = MarqueeConfig::default();

    assert!(config.validate().is_ok(), "defaults should validate");
}

#[rstest]
#[case::zero_compact_width(MarqueeConfig { compact_width: 0, ..Default::default() })]
#[case::zero_notification_ttl(MarqueeConfig { notification_ttl_ms: 0, ..Default::default() })]
#[case::zero_timeout(MarqueeConfig { request_timeout_secs: 0, ..Default::default() })]
fn rejects_zero_valued_limits(#[case] config: MarqueeConfig) {
    let result = config.validate();

    assert!(
        matches!(result, Err(CatalogueError::Configuration { .. })),
        "expected configuration error, got {result:?}"
    );
}

#[rstest]
fn rejects_unparsable_api_url() {
    let config = MarqueeConfig {
        api_url: Some("not a url".to_owned()),
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(result, Err(CatalogueError::InvalidUrl(_))),
        "expected invalid URL error, got {result:?}"
    );
}
