use crate::{
    aliases::exclude_aliased,
    error::CleanError,
    function_version::{DeleteRequest, FunctionVersion},
    retention::sort_versions,
};
use aws_sdk_lambda::{Client, Error};

/// Page size requested from the list APIs. Valid range is 1 to 10000.
const MAX_ITEMS: i32 = 10000;

/// Lambda client implementation.
#[derive(Clone)]
pub struct LambdaClient {
    inner: Client,
}

impl LambdaClient {
    /// Initialize the Lambda client.
    #[tracing::instrument(skip(config))]
    pub fn new(config: &aws_types::SdkConfig) -> LambdaClient {
        tracing::debug!("initializing lambda client");
        LambdaClient {
            inner: Client::new(config),
        }
    }

    /// Wrap an already configured SDK client.
    pub fn from_client(inner: Client) -> LambdaClient {
        LambdaClient { inner }
    }

    /// List every function in the region, following the pagination markers.
    #[tracing::instrument(skip(self))]
    pub async fn list_functions(&self) -> Result<Vec<FunctionVersion>, CleanError> {
        let mut functions = Vec::new();
        let mut marker = None;

        loop {
            let output = self
                .inner
                .list_functions()
                .set_marker(marker)
                .max_items(MAX_ITEMS)
                .send()
                .await
                .map_err(Error::from)?;

            for conf in output.functions.unwrap_or_default() {
                functions.push(conf.try_into()?);
            }

            marker = output.next_marker;
            if marker.is_none() {
                break;
            }
        }

        Ok(functions)
    }

    /// Fetch the functions named in a custom list.
    /// Names that don't exist are skipped with a warning.
    #[tracing::instrument(skip(self))]
    pub async fn get_functions(&self, names: &[String]) -> Result<Vec<FunctionVersion>, CleanError> {
        let mut functions = Vec::new();

        for name in names {
            let res = self.inner.get_function().function_name(name).send().await;

            match res {
                Ok(output) => {
                    if let Some(conf) = output.configuration {
                        functions.push(conf.try_into()?);
                    }
                }
                Err(sdk_err) => {
                    let err = sdk_err.into();
                    match err {
                        Error::ResourceNotFoundException(_) => {
                            tracing::warn!(
                                "the function {} does not exist, ensure you specified the correct name",
                                name
                            );
                            tracing::warn!("skipping {}", name);
                        }
                        _ => return Err(CleanError::Lambda(err)),
                    }
                }
            }
        }

        Ok(functions)
    }

    /// List the versions of a function sorted newest first.
    /// With `skip_aliases`, versions referenced by an alias are left out.
    #[tracing::instrument(skip(self, function), fields(function = %function.name))]
    pub async fn list_versions(
        &self,
        function: &FunctionVersion,
        skip_aliases: bool,
    ) -> Result<Vec<FunctionVersion>, CleanError> {
        let mut versions = Vec::new();
        let mut marker = None;

        loop {
            let output = self
                .inner
                .list_versions_by_function()
                .function_name(&function.name)
                .set_marker(marker)
                .max_items(MAX_ITEMS)
                .send()
                .await
                .map_err(Error::from)?;

            for conf in output.versions.unwrap_or_default() {
                versions.push(conf.try_into()?);
            }

            marker = output.next_marker;
            if marker.is_none() {
                break;
            }
        }

        if skip_aliases {
            let aliased = self.list_aliased_versions(function).await?;
            versions = exclude_aliased(versions, &aliased);
        }

        sort_versions(&mut versions);
        Ok(versions)
    }

    /// Version labels currently referenced by one of the function's aliases.
    #[tracing::instrument(skip(self, function), fields(function = %function.name))]
    pub async fn list_aliased_versions(
        &self,
        function: &FunctionVersion,
    ) -> Result<Vec<String>, CleanError> {
        let mut aliased = Vec::new();
        let mut marker = None;

        loop {
            let output = self
                .inner
                .list_aliases()
                .function_name(&function.name)
                .set_marker(marker)
                .max_items(MAX_ITEMS)
                .send()
                .await
                .map_err(Error::from)?;

            aliased.extend(
                output
                    .aliases
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|a| a.function_version),
            );

            marker = output.next_marker;
            if marker.is_none() {
                break;
            }
        }

        Ok(aliased)
    }

    /// Delete a single function version.
    #[tracing::instrument(skip(self))]
    pub async fn delete_version(&self, request: DeleteRequest) -> Result<(), CleanError> {
        self.inner
            .delete_function()
            .function_name(request.function_name)
            .qualifier(request.qualifier)
            .send()
            .await
            .map_err(Error::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_util::*;
    use aws_smithy_client::test_connection::TestConnection;

    fn function(name: &str) -> FunctionVersion {
        FunctionVersion {
            name: name.into(),
            version: "$LATEST".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_functions() -> Result<(), CleanError> {
        let conn = TestConnection::new(vec![(
            lambda_request("/2015-03-31/functions?MaxItems=10000"),
            lambda_response(200, r#"{"Functions": [{"FunctionName": "stopEC2-instances", "Version": "$LATEST", "CodeSize": 1200}, {"FunctionName": "putControls", "Version": "$LATEST", "CodeSize": 1500}]}"#),
        )]);
        let client = mock_client(&conn).await;

        let functions = client.list_functions().await?;
        assert_eq!(2, functions.len());
        assert_eq!("stopEC2-instances", functions[0].name);
        assert_eq!("putControls", functions[1].name);
        conn.assert_requests_match(&vec![]);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_versions_follows_markers_and_sorts() -> Result<(), CleanError> {
        let conn = TestConnection::new(vec![
            (
                lambda_request("/2015-03-31/functions/my-fn/versions?MaxItems=10000"),
                lambda_response(200, r#"{"NextMarker": "page2", "Versions": [{"FunctionName": "my-fn", "Version": "$LATEST", "CodeSize": 10}, {"FunctionName": "my-fn", "Version": "1", "CodeSize": 10}]}"#),
            ),
            (
                lambda_request("/2015-03-31/functions/my-fn/versions?Marker=page2&MaxItems=10000"),
                lambda_response(200, r#"{"Versions": [{"FunctionName": "my-fn", "Version": "2", "CodeSize": 10}]}"#),
            ),
        ]);
        let client = mock_client(&conn).await;

        let versions = client.list_versions(&function("my-fn"), false).await?;
        let labels: Vec<_> = versions.iter().map(|v| v.version.as_str()).collect();
        assert_eq!(vec!["2", "1", "$LATEST"], labels);
        conn.assert_requests_match(&vec![]);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_versions_skips_aliased_versions() -> Result<(), CleanError> {
        let conn = TestConnection::new(vec![
            (
                lambda_request("/2015-03-31/functions/my-fn/versions?MaxItems=10000"),
                lambda_response(200, r#"{"Versions": [{"FunctionName": "my-fn", "Version": "$LATEST", "CodeSize": 10}, {"FunctionName": "my-fn", "Version": "1", "CodeSize": 10}, {"FunctionName": "my-fn", "Version": "2", "CodeSize": 10}]}"#),
            ),
            (
                lambda_request("/2015-03-31/functions/my-fn/aliases?MaxItems=10000"),
                lambda_response(200, r#"{"Aliases": [{"Name": "live", "FunctionVersion": "1"}]}"#),
            ),
        ]);
        let client = mock_client(&conn).await;

        let versions = client.list_versions(&function("my-fn"), true).await?;
        let labels: Vec<_> = versions.iter().map(|v| v.version.as_str()).collect();
        assert_eq!(vec!["2", "$LATEST"], labels);
        conn.assert_requests_match(&vec![]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_functions_skips_missing() -> Result<(), CleanError> {
        let conn = TestConnection::new(vec![
            (
                lambda_request("/2015-03-31/functions/missing"),
                lambda_error(404, "ResourceNotFoundException"),
            ),
            (
                lambda_request("/2015-03-31/functions/putControls"),
                lambda_response(200, r#"{"Configuration": {"FunctionName": "putControls", "Version": "$LATEST", "CodeSize": 1500}}"#),
            ),
        ]);
        let client = mock_client(&conn).await;

        let names = vec!["missing".to_string(), "putControls".to_string()];
        let functions = client.get_functions(&names).await?;
        assert_eq!(1, functions.len());
        assert_eq!("putControls", functions[0].name);
        conn.assert_requests_match(&vec![]);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_version() -> Result<(), CleanError> {
        let conn = TestConnection::new(vec![(
            lambda_request("/2015-03-31/functions/my-fn?Qualifier=3"),
            lambda_response(204, ""),
        )]);
        let client = mock_client(&conn).await;

        client
            .delete_version(DeleteRequest {
                function_name: "my-fn".into(),
                qualifier: "3".into(),
            })
            .await?;
        conn.assert_requests_match(&vec![]);

        Ok(())
    }
}
