use crate::app::dto::*;
use crate::app::engine::GodClassEngine;
use rmcp::{
    Json, ServerHandler, ServiceExt, handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters, model::*, tool, tool_handler, tool_router,
    transport::stdio,
};
use tokio::task::spawn_blocking;

#[derive(Clone)]
pub struct GcMcpServer {
    engine: GodClassEngine,
    tool_router: ToolRouter<Self>,
}

impl GcMcpServer {
    pub fn new(engine: GodClassEngine) -> Self {
        Self {
            engine,
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        let service = self.serve(stdio()).await?;
        service.waiting().await?;
        Ok(())
    }
}

#[tool_router]
impl GcMcpServer {
    #[tool(description = "Compute WMC, TCC and ATFD for a class in the loaded model and report \
                          whether it is a God Class.")]
    async fn evaluate_class(
        &self,
        params: Parameters<EvaluateRequest>,
    ) -> Result<Json<ClassVerdict>, String> {
        let engine = self.engine.clone();
        let req = params.0;
        spawn_blocking(move || engine.evaluate(req))
            .await
            .map_err(|e| format!("task join error: {e}"))?
            .map(Json)
            .map_err(|e| format!("{e:#}"))
    }

    #[tool(description = "Evaluate every class (optionally filtered by a regex) and list God \
                          Class findings.")]
    async fn scan_classes(
        &self,
        params: Parameters<ScanRequest>,
    ) -> Result<Json<ScanResponse>, String> {
        let engine = self.engine.clone();
        let req = params.0;
        spawn_blocking(move || engine.scan(req))
            .await
            .map_err(|e| format!("task join error: {e}"))?
            .map(Json)
            .map_err(|e| format!("{e:#}"))
    }

    #[tool(description = "Evaluate a class model passed inline (not part of the loaded model).")]
    async fn measure_class(
        &self,
        params: Parameters<MeasureRequest>,
    ) -> Result<Json<ClassVerdict>, String> {
        let engine = self.engine.clone();
        let req = params.0;
        spawn_blocking(move || engine.measure(req))
            .await
            .map_err(|e| format!("task join error: {e}"))?
            .map(Json)
            .map_err(|e| format!("{e:#}"))
    }
}

#[tool_handler]
impl ServerHandler for GcMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Detect God Classes (WMC >= threshold, TCC < 1/3, ATFD > threshold) in a \
                 resolved class model."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
