use crate::debugger::{Component, DebugLevel};
use crate::join::errors::{JoinError, JoinSide};
use crate::schema::{Column, LogicalSchema};
use crate::{schema_debug, schema_scope, schema_trace, schema_warn};

/// What a join operator needs to know up front: the schema of its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinParams {
    schema: LogicalSchema,
}

impl JoinParams {
    pub fn schema(&self) -> &LogicalSchema {
        &self.schema
    }

    pub fn into_schema(self) -> LogicalSchema {
        self.schema
    }
}

pub struct JoinParamsFactory;

impl JoinParamsFactory {
    /// Merges the schemas of two join sources.
    ///
    /// The result is keyed by the left source's key column. Its value columns
    /// are the left value columns followed by the right value columns, names
    /// unchanged. Both sources must have exactly one key column and the key
    /// types must be equal.
    pub fn create(left: &LogicalSchema, right: &LogicalSchema) -> Result<JoinParams, JoinError> {
        let result = schema_scope!(DebugLevel::Trace, Component::Join, "create join params", {
            Self::merge(left, right)
        });

        if let Err(e) = &result {
            schema_warn!(Component::Join, "{}", e);
        }
        result
    }

    fn merge(left: &LogicalSchema, right: &LogicalSchema) -> Result<JoinParams, JoinError> {
        let left_key = single_key(left, JoinSide::Left)?;
        let right_key = single_key(right, JoinSide::Right)?;

        if left_key.ty() != right_key.ty() {
            return Err(JoinError::KeyTypeMismatch {
                left: left_key.ty().clone(),
                right: right_key.ty().clone(),
            });
        }

        schema_trace!(Component::Join, "left:  {}", left);
        schema_trace!(Component::Join, "right: {}", right);

        let schema = LogicalSchema::builder()
            .key_column(left_key.name().clone(), left_key.ty().clone())
            .value_columns(left.value())
            .value_columns(right.value())
            .build();

        schema_debug!(Component::Join, "joined schema: {}", schema);
        Ok(JoinParams { schema })
    }
}

fn single_key(schema: &LogicalSchema, side: JoinSide) -> Result<&Column, JoinError> {
    match schema.key() {
        [key] => Ok(key),
        keys => Err(JoinError::KeyCount {
            side,
            count: keys.len(),
        }),
    }
}
