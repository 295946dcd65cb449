//! Model assembly
//!
//! Builds the attribute map a resolved view renders from. The attribute name
//! under which the message appears is configurable; disabling it strips all
//! error content, for deployments that must not leak internals.

use serde_json::{Map, Value};

use crate::fault::FaultDescriptor;

/// Model key for the fault's most specific type name.
pub const CLASS_NAME_KEY: &str = "className";

/// Model key for the structured business error code.
pub const ERROR_CODE_KEY: &str = "errorCode";

/// Assemble the model for a resolved view.
///
/// With `attribute` absent the model stays empty. Otherwise it carries
/// `className`, the message under `attribute`, and `errorCode` when the
/// descriptor has one.
pub fn build_model(descriptor: &FaultDescriptor, attribute: Option<&str>) -> Map<String, Value> {
    let mut model = Map::new();

    let Some(attribute) = attribute else {
        return model;
    };

    model.insert(
        CLASS_NAME_KEY.to_string(),
        Value::String(descriptor.type_name().to_string()),
    );
    model.insert(
        attribute.to_string(),
        Value::String(descriptor.message().to_string()),
    );
    if let Some(code) = descriptor.code() {
        model.insert(ERROR_CODE_KEY.to_string(), Value::String(code.to_string()));
    }

    model
}
