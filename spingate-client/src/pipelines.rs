//! Pipeline-related API endpoints

use crate::GateClient;
use crate::error::{ClientError, Result};
use spingate_core::domain::pipeline::Pipeline;
use spingate_core::dto::pipeline::CreatePipelineRequest;
use tracing::debug;

/// Pipeline configs of one application
fn pipeline_configs_path(application: &str) -> String {
    format!("/applications/{}/pipelineConfigs", application)
}

/// One named pipeline config of an application
fn pipeline_config_path(application: &str, name: &str) -> String {
    format!("/applications/{}/pipelineConfigs/{}", application, name)
}

/// History of a pipeline config, newest first, capped at one entry
///
/// There is no direct by-id resource on the API; the newest history entry
/// stands in for the live configuration.
fn pipeline_history_path(id: &str) -> String {
    format!("/pipelineConfigs/{}/history?limit=1", id)
}

/// Target of create and update; the service disambiguates the two by the
/// identity fields present in the body.
const PIPELINES_PATH: &str = "/pipelines";

/// Delete target, addressed by the logical `(application, name)` identity
fn delete_pipeline_path(application: &str, name: &str) -> String {
    format!("/pipelines/{}/{}", application, name)
}

/// First entry of a history response, or the one error this client
/// synthesizes itself
fn latest_history_entry(history: Vec<Pipeline>, id: &str) -> Result<Pipeline> {
    history
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::PipelineNotFound(id.to_string()))
}

impl GateClient {
    // =============================================================================
    // Pipeline Management
    // =============================================================================

    /// List all pipelines of an application
    ///
    /// # Arguments
    /// * `application` - The owning application name
    ///
    /// # Returns
    /// The application's pipelines in server order; may be empty
    ///
    /// # Example
    /// ```no_run
    /// # use spingate_client::GateClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GateClient::new("http://localhost:8084");
    /// for pipeline in client.list_pipelines("app1").await? {
    ///     println!("{} (index {})", pipeline.name, pipeline.index);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_pipelines(&self, application: &str) -> Result<Vec<Pipeline>> {
        debug!(application, "listing pipelines");
        let url = format!("{}{}", self.base_url(), pipeline_configs_path(application));
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get a pipeline by its server-assigned id
    ///
    /// Queries the config's history capped at one entry and returns the
    /// newest one.
    ///
    /// # Arguments
    /// * `id` - The server-assigned pipeline id
    ///
    /// # Returns
    /// The pipeline, or [`ClientError::PipelineNotFound`] when the history
    /// is empty
    pub async fn get_pipeline_by_id(&self, id: &str) -> Result<Pipeline> {
        debug!(id, "fetching pipeline by id");
        let url = format!("{}{}", self.base_url(), pipeline_history_path(id));
        let response = self.client.get(&url).send().await?;

        let history: Vec<Pipeline> = self.handle_response(response).await?;
        latest_history_entry(history, id)
    }

    /// Get a pipeline by application and name
    ///
    /// # Arguments
    /// * `application` - The owning application name
    /// * `name` - The pipeline name, unique within the application
    ///
    /// # Returns
    /// The pipeline details
    pub async fn get_pipeline(&self, application: &str, name: &str) -> Result<Pipeline> {
        debug!(application, name, "fetching pipeline by name");
        let url = format!(
            "{}{}",
            self.base_url(),
            pipeline_config_path(application, name)
        );
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Create a new pipeline
    ///
    /// A duplicate name is not interpreted client-side; the service reports
    /// it through the response status like any other API error.
    ///
    /// # Arguments
    /// * `req` - The pipeline creation request
    pub async fn create_pipeline(&self, req: &CreatePipelineRequest) -> Result<()> {
        debug!(
            application = %req.application,
            name = %req.name,
            "creating pipeline"
        );
        let url = format!("{}{}", self.base_url(), PIPELINES_PATH);
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_empty_response(response).await
    }

    /// Update an existing pipeline
    ///
    /// Posts to the same endpoint as create; the pipeline is expected to
    /// already carry valid identity fields so the service treats the body as
    /// an update.
    ///
    /// # Arguments
    /// * `pipeline` - The full pipeline document to store
    pub async fn update_pipeline(&self, pipeline: &Pipeline) -> Result<()> {
        debug!(
            application = %pipeline.application,
            name = %pipeline.name,
            "updating pipeline"
        );
        let url = format!("{}{}", self.base_url(), PIPELINES_PATH);
        let response = self.client.post(&url).json(pipeline).send().await?;

        self.handle_empty_response(response).await
    }

    /// Delete a pipeline
    ///
    /// # Arguments
    /// * `pipeline` - A pipeline carrying the `(application, name)` identity
    pub async fn delete_pipeline(&self, pipeline: &Pipeline) -> Result<()> {
        debug!(
            application = %pipeline.application,
            name = %pipeline.name,
            "deleting pipeline"
        );
        let url = format!(
            "{}{}",
            self.base_url(),
            delete_pipeline_path(&pipeline.application, &pipeline.name)
        );
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
