//! `timeplus_stream` resource.
//!
//! # What this module handles:
//! - Translating the stream state model to and from [`Stream`]
//! - Column checks: at least one column, at most one event-time column
//! - Primary keys: columns flagged `primary_key` become a quoted key
//!   expression on write, and the expression is parsed back on read
//! - Hiding the server's `_tp_time` column unless the user declared it
//!
//! # What this module does NOT handle:
//! - Recovering the event-time column from the server; the flag is carried
//!   forward from prior state by column name

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use timeplus_client::{Column, Stream, StreamMode, TimeplusClient};
use tracing::debug;

use super::{Resource, or_empty};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::drift::{self, STREAM_RETENTION_UNSET, VIRTUAL_TIME_COLUMN};
use crate::error::{Action, ProviderError, Result};
use crate::schema::{Attribute, Block, Schema};

const ENTITY: &str = "Stream";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnModel {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub column_type: String,
    pub default: Option<String>,
    pub codec: Option<String>,
    pub use_as_event_time: Option<bool>,
    pub primary_key: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamModel {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub mode: Option<String>,
    pub retention_bytes: Option<i64>,
    pub retention_ms: Option<i64>,
    pub history_ttl: Option<String>,
    #[serde(default)]
    pub column: Vec<ColumnModel>,
}

pub struct StreamResource;

pub(crate) fn column_attributes_schema() -> Block {
    Block::list("Define the columns of the stream")
        .with_attribute(
            "name",
            Attribute::required_string().description("The column name"),
        )
        .with_attribute(
            "type",
            Attribute::required_string().description("The type name of the column"),
        )
        .with_attribute(
            "default",
            Attribute::optional_string()
                .description("The default value for the column")
                .default(json!("")),
        )
        .with_attribute(
            "codec",
            Attribute::optional_string()
                .description("The codec for value encoding")
                .default(json!("")),
        )
        .with_attribute(
            "use_as_event_time",
            Attribute::optional_bool()
                .description(
                    "If set to `true`, this column will be used as the event time column. \
                     Only one column can be marked as the event time column in a stream.",
                )
                .requires_replace(),
        )
        .with_attribute(
            "primary_key",
            Attribute::optional_bool()
                .description(
                    "If set to `true`, this column will be used as the primary key, or part of \
                     the combined primary key if multiple columns are marked as primary keys.",
                )
                .requires_replace(),
        )
}

fn parse_mode(mode: &Option<String>) -> std::result::Result<StreamMode, String> {
    match mode.as_deref() {
        None | Some("") => Ok(StreamMode::Append),
        Some(m) => m.parse(),
    }
}

fn event_time_column(columns: &[ColumnModel]) -> Option<&str> {
    columns
        .iter()
        .find(|c| c.use_as_event_time == Some(true))
        .map(|c| c.name.as_str())
}

impl StreamModel {
    /// The wire value for this model. Column codecs are only sent on create.
    fn to_wire(&self, include_codec: bool) -> Result<Stream> {
        let mode = parse_mode(&self.mode).map_err(|e| {
            ProviderError::Validation(Diagnostic::attribute_error("mode", "Invalid Mode", e).into())
        })?;

        let columns = self
            .column
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                column_type: c.column_type.clone(),
                default: or_empty(&c.default),
                codec: if include_codec {
                    c.codec.clone().filter(|codec| !codec.is_empty())
                } else {
                    None
                },
                ..Column::default()
            })
            .collect();

        let primary_key = drift::format_primary_key(
            self.column
                .iter()
                .filter(|c| c.primary_key == Some(true))
                .map(|c| c.name.as_str()),
        );

        Ok(Stream {
            name: self.name.clone(),
            description: or_empty(&self.description),
            columns,
            event_time_column: event_time_column(&self.column)
                .unwrap_or_default()
                .to_string(),
            ttl_expression: or_empty(&self.history_ttl),
            mode: Some(mode),
            primary_key: primary_key.unwrap_or_default(),
            retention_bytes: self.retention_bytes.unwrap_or_default(),
            retention_ms: self.retention_ms.unwrap_or_default(),
            ..Stream::default()
        })
    }

    /// Fold the server's view of the stream into this state.
    pub(crate) fn refresh(mut self, server: Stream) -> Self {
        let declares_virtual = self.column.iter().any(|c| c.name == VIRTUAL_TIME_COLUMN);
        let primary_keys = drift::parse_primary_key(&server.primary_key);

        let columns = server
            .columns
            .into_iter()
            .filter(|c| !drift::hide_column(&c.name, declares_virtual))
            .map(|c| {
                let prior = self.column.iter().find(|p| p.name == c.name);
                let primary_key = if primary_keys.contains(&c.name) {
                    Some(true)
                } else {
                    prior.and_then(|p| p.primary_key).filter(|pk| !pk)
                };
                ColumnModel {
                    codec: Some(drift::unwrap_codec(c.codec.as_deref().unwrap_or_default())),
                    use_as_event_time: prior.and_then(|p| p.use_as_event_time),
                    primary_key,
                    default: Some(c.default),
                    column_type: c.column_type,
                    name: c.name,
                }
            })
            .collect();

        let server_mode = server.mode.unwrap_or_default();
        if parse_mode(&self.mode).ok() != Some(server_mode) {
            self.mode = Some(server_mode.to_string());
        }

        self.name = server.name;
        self.column = columns;
        self.description = drift::optional_string(&self.description, &server.description);
        self.retention_bytes = drift::optional_i64(
            self.retention_bytes,
            server.retention_bytes,
            STREAM_RETENTION_UNSET,
        );
        self.retention_ms =
            drift::optional_i64(self.retention_ms, server.retention_ms, STREAM_RETENTION_UNSET);
        self.history_ttl = drift::ttl_expression(&self.history_ttl, &server.ttl_expression);
        self
    }
}

#[async_trait]
impl Resource for StreamResource {
    type Model = StreamModel;

    fn type_name(&self) -> &'static str {
        "stream"
    }

    fn schema(&self) -> Schema {
        Schema::new(
            "Timeplus streams are similar to tables in traditional SQL databases. The key \
             difference is that a stream is an append-only (by default), unbounded, constantly \
             changing group of events.",
        )
        .with_attribute(
            "name",
            Attribute::required_string()
                .description("The stream name")
                .requires_replace(),
        )
        .with_attribute(
            "description",
            Attribute::optional_string().description("A detailed text describes the stream"),
        )
        .with_attribute(
            "mode",
            Attribute::optional_string()
                .description(
                    "The stream mode. Options: append, changelog, changelog_kv, versioned_kv. \
                     Default: \"append\"",
                )
                .requires_replace(),
        )
        .with_attribute(
            "retention_bytes",
            Attribute::optional_computed_int64().description(
                "The retention size threshold in bytes indicates how much data could be kept \
                 in the streaming store",
            ),
        )
        .with_attribute(
            "retention_ms",
            Attribute::optional_computed_int64().description(
                "The retention period threshold in milliseconds indicates how long data could \
                 be kept in the streaming store",
            ),
        )
        .with_attribute(
            "history_ttl",
            Attribute::optional_string().description(
                "A SQL expression defines the maximum age of data that are persisted in the \
                 historical store",
            ),
        )
        .with_block("column", column_attributes_schema())
    }

    fn validate(&self, model: &StreamModel) -> Diagnostics {
        let mut diags = Diagnostics::new();

        if let Err(e) = parse_mode(&model.mode) {
            diags.push(Diagnostic::attribute_error("mode", "Invalid Mode", e));
        }

        if model.column.is_empty() {
            diags.push(Diagnostic::attribute_error(
                "column",
                "No Columns",
                "At least one column must be defined for a stream.",
            ));
        }

        let mut seen_event_time = false;
        for (i, column) in model.column.iter().enumerate() {
            if column.use_as_event_time != Some(true) {
                continue;
            }
            if seen_event_time {
                diags.push(Diagnostic::attribute_error(
                    format!("column[{}]", i),
                    "Too Many EventTime Columns",
                    "Only one column can be marked as event time column.",
                ));
            }
            seen_event_time = true;
        }

        diags
    }

    async fn create(&self, client: &TimeplusClient, plan: StreamModel) -> Result<StreamModel> {
        let stream = plan.to_wire(true)?;
        let created = client
            .create_stream(&stream)
            .await
            .map_err(|e| ProviderError::transport(Action::Creating, ENTITY, &plan.name, e))?;

        let mut state = plan;
        state.retention_bytes = drift::optional_i64(
            state.retention_bytes,
            created.retention_bytes,
            STREAM_RETENTION_UNSET,
        );
        state.retention_ms =
            drift::optional_i64(state.retention_ms, created.retention_ms, STREAM_RETENTION_UNSET);

        debug!(name = %state.name, "created a timeplus_stream resource");
        Ok(state)
    }

    async fn read(&self, client: &TimeplusClient, state: StreamModel) -> Result<StreamModel> {
        let server = client
            .get_stream(&state.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Reading, ENTITY, &state.name, e))?;
        Ok(state.refresh(server))
    }

    async fn update(
        &self,
        client: &TimeplusClient,
        plan: StreamModel,
        _prior: StreamModel,
    ) -> Result<StreamModel> {
        let stream = plan.to_wire(false)?;
        let updated = client
            .update_stream(&stream)
            .await
            .map_err(|e| ProviderError::transport(Action::Updating, ENTITY, &plan.name, e))?;

        let mut state = plan;
        state.retention_bytes = drift::optional_i64(
            state.retention_bytes,
            updated.retention_bytes,
            STREAM_RETENTION_UNSET,
        );
        state.retention_ms =
            drift::optional_i64(state.retention_ms, updated.retention_ms, STREAM_RETENTION_UNSET);

        debug!(name = %state.name, "updated a timeplus_stream resource");
        Ok(state)
    }

    async fn delete(&self, client: &TimeplusClient, state: StreamModel) -> Result<()> {
        client
            .delete_stream(&state.name)
            .await
            .map_err(|e| ProviderError::transport(Action::Deleting, ENTITY, &state.name, e))?;
        debug!(name = %state.name, "deleted a timeplus_stream resource");
        Ok(())
    }

    fn import_state(&self, id: &str) -> StreamModel {
        StreamModel {
            name: id.to_string(),
            ..StreamModel::default()
        }
    }
}
