use super::http;
use super::models::{BruConfig, RequestShowView, RunResultView};
use super::output;
use crate::core::error::BruError;
use crate::syntax::{BruFile, ResolvedRequest};
use std::path::Path;
use std::time::Instant;

pub struct BruClient {
    config: BruConfig,
    bru_file: BruFile,
}

impl BruClient {
    /// Parses the configured file and merges in the variables found around it.
    pub fn load(config: BruConfig) -> Result<Self, BruError> {
        let path = Path::new(&config.bru_file_path);
        let mut bru_file = BruFile::from_path(path)?;
        let variables =
            crate::environment::collect_variables(path, config.environment.as_deref())?;
        bru_file.set_variables(variables);

        tracing::info!(
            file = %crate::core::paths::display_path(path),
            "file parsed successfully"
        );
        Ok(Self { config, bru_file })
    }

    pub fn config(&self) -> &BruConfig {
        &self.config
    }

    pub fn bru_file(&self) -> &BruFile {
        &self.bru_file
    }

    pub fn prepare(&self) -> Result<ResolvedRequest, BruError> {
        let view = self
            .bru_file
            .request_view()
            .ok_or_else(|| BruError::RequestNotFound(self.config.bru_file_path.clone()))?;
        Ok(view.build()?)
    }

    pub fn show(&self) -> Result<RequestShowView, BruError> {
        let request = self.prepare()?;
        let meta = self.bru_file.meta();
        Ok(RequestShowView {
            body: request.body,
            headers: request.headers,
            method: request.method.as_str().to_string(),
            name: meta.map(|m| m.name.clone()).filter(|n| !n.is_empty()),
            seq: meta.map(|m| m.seq.clone()).filter(|s| !s.is_empty()),
            url: request.url,
        })
    }

    pub async fn run(&self) -> Result<RunResultView, BruError> {
        let request = self.prepare()?;

        let start_time = Instant::now();
        let response = http::execute_request(&request).await?;
        let elapsed_ms = start_time.elapsed().as_millis() as u64;

        tracing::debug!(status = response.status, elapsed_ms, "response status");
        for (key, value) in &response.headers {
            tracing::debug!(header = %key, value = %value, "response header");
        }

        let output_file = output::maybe_save_output(&self.config, &response.body)?;

        Ok(RunResultView {
            elapsed_ms,
            method: request.method.as_str().to_string(),
            output_file: output_file.map(|p| crate::core::paths::clean_path(&p)),
            status: response.status,
            url: request.url,
        })
    }
}
