use crate::core::error::BruError;
use crate::syntax::ResolvedRequest;
use std::collections::BTreeMap;
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

pub async fn execute_request(request: &ResolvedRequest) -> Result<HttpResponse, BruError> {
    tracing::debug!(
        method = request.method.as_str(),
        url = %request.url,
        "requesting"
    );

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(crate::core::version::user_agent())
        .build()?;
    let mut req_builder = client.request(request.method.to_reqwest_method(), &request.url);

    for (key, value) in &request.headers {
        tracing::debug!(header = %key, value = %value, "adding header");
        req_builder = req_builder.header(key.as_str(), value.as_str());
    }

    if let Some(body) = &request.body {
        let has_content_type = request
            .headers
            .keys()
            .any(|k| k.eq_ignore_ascii_case(reqwest::header::CONTENT_TYPE.as_str()));
        if !has_content_type && crate::core::json::is_json_content(body) {
            req_builder = req_builder.header(
                reqwest::header::CONTENT_TYPE,
                crate::core::json::CONTENT_TYPE,
            );
        }
        req_builder = req_builder.body(body.clone());
    }

    let response = req_builder.send().await?;
    let status = response.status().as_u16();

    let mut headers = BTreeMap::new();
    for (key, value) in response.headers() {
        if let Ok(value_str) = value.to_str() {
            headers.insert(key.to_string(), value_str.to_string());
        }
    }

    let body = response.bytes().await?.to_vec();
    tracing::debug!(status, response = body.len(), "response received");

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
