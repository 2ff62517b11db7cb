use crate::lambda::LambdaClient;
use aws_sdk_lambda::{Client, Config, Credentials};
use aws_smithy_client::{erase::DynConnector, test_connection::TestConnection};
use aws_smithy_http::body::SdkBody;
use aws_types::{region::Region, SdkConfig};

/// Region every mocked client talks to
pub const MOCK_REGION: &str = "us-west-1";

/// SDK configuration with static credentials in the mocked region
pub async fn mock_config() -> SdkConfig {
    aws_config::from_env()
        .region(Region::new(MOCK_REGION))
        .credentials_provider(Credentials::new(
            "accesskey",
            "privatekey",
            None,
            None,
            "mock",
        ))
        .load()
        .await
}

/// Lambda client that answers from the canned events of `conn`
pub async fn mock_client(conn: &TestConnection<SdkBody>) -> LambdaClient {
    let config = Config::new(&mock_config().await);
    LambdaClient::from_client(Client::from_conf_conn(
        config,
        DynConnector::new(conn.clone()),
    ))
}

/// Expected request to a Lambda API path, without a body
pub fn lambda_request(path_and_query: &str) -> http::Request<SdkBody> {
    http::Request::builder()
        .uri(format!(
            "https://lambda.{MOCK_REGION}.amazonaws.com{path_and_query}"
        ))
        .body(SdkBody::empty())
        .unwrap()
}

/// Canned Lambda API response
pub fn lambda_response(status: u16, body: &'static str) -> http::Response<SdkBody> {
    http::Response::builder()
        .status(status)
        .body(SdkBody::from(body))
        .unwrap()
}

/// Canned Lambda API error response carrying the error type header
pub fn lambda_error(status: u16, error_type: &str) -> http::Response<SdkBody> {
    http::Response::builder()
        .status(status)
        .header("x-amzn-errortype", error_type)
        .body(SdkBody::from(r#"{"Type": "User", "Message": "mocked failure"}"#))
        .unwrap()
}
