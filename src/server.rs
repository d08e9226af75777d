//! MCP server exposing the catalog tools over the Model Context Protocol.

use crate::state::CatalogState;
use crate::tools::get_documentation::{GetDocumentationRequest, handle_get_documentation};
use crate::tools::list_entries::{
    ListCategoriesRequest, ListEntriesRequest, handle_list_categories, handle_list_entries,
};
use crate::tools::reload_catalog::handle_reload_catalog;
use crate::tools::search::{SearchRequest, handle_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars::{self, JsonSchema, generate::SchemaSettings},
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP Server for component and template documentation queries
#[derive(Clone)]
pub struct CatalogServer {
    /// Shared catalog state (current index, source path, defaults)
    state: Arc<CatalogState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for CatalogServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogServer")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[tool_router]
impl CatalogServer {
    pub fn new(state: Arc<CatalogState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    /// Get a reference to the shared catalog state.
    pub fn state(&self) -> &Arc<CatalogState> {
        &self.state
    }

    #[tool(
        description = "Search the catalog of components and page templates by name, functionality or description. Ranks entries by keyword relevance. Examples: 'tabla con filtros', 'mapa interactivo', 'calendario feriados', 'login'.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search_catalog(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request).await
    }

    #[tool(
        description = "Get the full documentation of one component or template: description, keywords, dependencies, configuration options and template file.",
        input_schema = inline_schema_for_type::<GetDocumentationRequest>()
    )]
    async fn get_documentation(
        &self,
        Parameters(request): Parameters<GetDocumentationRequest>,
    ) -> std::result::Result<String, String> {
        handle_get_documentation(&self.state, request).await
    }

    #[tool(
        description = "List catalog entries grouped by category. Optionally filter by category slug and by kind (component or template).",
        input_schema = inline_schema_for_type::<ListEntriesRequest>()
    )]
    async fn list_entries(
        &self,
        Parameters(request): Parameters<ListEntriesRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_entries(&self.state, request).await
    }

    #[tool(
        description = "List the categories of the catalog with their entry counts. Optionally only categories that contain components or templates.",
        input_schema = inline_schema_for_type::<ListCategoriesRequest>()
    )]
    async fn list_categories(
        &self,
        Parameters(request): Parameters<ListCategoriesRequest>,
    ) -> std::result::Result<String, String> {
        handle_list_categories(&self.state, request).await
    }

    #[tool(
        description = "Reload the catalog document from disk. The current catalog stays active if the new one is invalid."
    )]
    async fn reload_catalog(&self) -> std::result::Result<String, String> {
        handle_reload_catalog(&self.state).await
    }
}

#[tool_handler]
impl ServerHandler for CatalogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "poncho-mcp: Documentation lookup for Poncho components and page templates. \
                 Use search_catalog to find entries by functionality, then get_documentation \
                 with an entry id for its full documentation."
                    .to_string(),
            )
    }
}

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline enum definitions instead of $ref patterns. This ensures MCP Inspector
/// displays enums as dropdown widgets rather than raw JSON input fields.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();
    let object = serde_json::to_value(schema).expect("failed to serialize schema");

    let json_object = match object {
        serde_json::Value::Object(object) => object,
        _ => panic!("Schema serialization produced non-object value"),
    };

    Arc::new(json_object)
}
