//! AWS session construction.
//!
//! The SDK configuration is loaded once and handed to each client
//! explicitly, so nothing downstream reads ambient process state.

use aws_config::{BehaviorVersion, Region, SdkConfig};
use tracing::debug;

/// Overrides for the default credential/region chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsSettings {
    /// Region override (otherwise `AWS_REGION`, profile, IMDS, ...)
    pub region: Option<String>,
    /// Named profile from the shared config files
    pub profile: Option<String>,
    /// Custom endpoint, e.g. LocalStack
    pub endpoint_url: Option<String>,
}

/// Load the SDK configuration with `settings` applied on top of the defaults.
pub async fn load_sdk_config(settings: &AwsSettings) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(url) = &settings.endpoint_url {
        loader = loader.endpoint_url(url);
    }

    let config = loader.load().await;
    debug!(
        region = config.region().map(|r| r.as_ref()).unwrap_or("<unset>"),
        profile = settings.profile.as_deref().unwrap_or("<default>"),
        "loaded AWS configuration"
    );
    config
}
