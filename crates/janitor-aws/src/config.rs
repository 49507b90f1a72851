use aws_sdk_cloudformation::Client;
use janitor_model::AwsConfig;
use tracing::debug;

/// Build a CloudFormation client from the default credential chain.
///
/// `region` and `endpoint_url` override what the chain resolves; an endpoint
/// override is meant for LocalStack-style emulators.
pub async fn connect(cfg: &AwsConfig) -> Client {
    let mut loader = aws_config::from_env();
    if let Some(region) = &cfg.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    let shared = loader.load().await;

    let mut builder = aws_sdk_cloudformation::config::Builder::from(&shared);
    if let Some(endpoint_url) = &cfg.endpoint_url {
        builder = builder.endpoint_url(endpoint_url);
    }

    debug!(
        region = ?shared.region(),
        endpoint_url = cfg.endpoint_url.as_deref().unwrap_or("<default>"),
        "cloudformation client configured"
    );
    Client::from_conf(builder.build())
}
