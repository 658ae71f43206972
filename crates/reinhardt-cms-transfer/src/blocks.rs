//! Block-type capability table
//!
//! Tells the exporter how to turn the payload of each block type into a
//! config mapping. Capabilities are registered once per block type.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::TransferResult;
use crate::host::BlockPayload;
use crate::items::{Config, JSON_CONFIG_KEY};
use crate::reference::ReferenceCodec;

/// Block type identifier
pub type BlockType = String;

/// Config keys emitted for rich-text blocks.
pub const RICH_TEXT_FIELDS: [&str; 3] = ["body", "json", "rte"];

/// Serialization routine declared by a block type.
pub trait BlockSerializer: Send + Sync {
	/// Builds the config mapping of a block.
	fn serialize(&self, payload: &BlockPayload, codec: &ReferenceCodec) -> TransferResult<Config>;
}

impl<F> BlockSerializer for F
where
	F: Fn(&BlockPayload, &ReferenceCodec) -> TransferResult<Config> + Send + Sync,
{
	fn serialize(&self, payload: &BlockPayload, codec: &ReferenceCodec) -> TransferResult<Config> {
		self(payload, codec)
	}
}

/// How a block type is exported.
#[derive(Clone)]
pub enum BlockCapability {
	/// Pass-through JSON config, copied verbatim under `_json`.
	JsonConfig,
	/// Rich text, exported as exactly `{body, json, rte}`.
	RichText,
	/// The block type's own serialization routine.
	Custom(Arc<dyn BlockSerializer>),
	/// The listed editable fields, coerced through the codec.
	FormFields(Vec<String>),
	/// Every field of the payload, coerced through the codec.
	AllFields,
}

impl std::fmt::Debug for BlockCapability {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::JsonConfig => f.write_str("JsonConfig"),
			Self::RichText => f.write_str("RichText"),
			Self::Custom(_) => f.write_str("Custom(..)"),
			Self::FormFields(fields) => f.debug_tuple("FormFields").field(fields).finish(),
			Self::AllFields => f.write_str("AllFields"),
		}
	}
}

static JSON_CONFIG: BlockCapability = BlockCapability::JsonConfig;

impl BlockCapability {
	/// Builds the config mapping of a block payload.
	pub fn export(&self, payload: &BlockPayload, codec: &ReferenceCodec) -> TransferResult<Config> {
		let mut config = Config::new();
		match self {
			Self::JsonConfig => {
				let json = payload.json_config.clone().unwrap_or_default();
				config.insert(JSON_CONFIG_KEY.to_string(), Value::Object(json));
			}
			Self::RichText => {
				for field in RICH_TEXT_FIELDS {
					let value = match payload.fields.get(field) {
						Some(value) => codec.coerce(value)?,
						None => Value::Null,
					};
					config.insert(field.to_string(), value);
				}
			}
			Self::Custom(serializer) => return serializer.serialize(payload, codec),
			Self::FormFields(fields) => {
				for field in fields {
					if let Some(value) = payload.fields.get(field) {
						config.insert(field.clone(), codec.coerce(value)?);
					}
				}
			}
			Self::AllFields => return codec.coerce_fields(&payload.fields),
		}
		Ok(config)
	}
}

/// Registry of block-type capabilities
#[derive(Debug, Clone)]
pub struct BlockRegistry {
	blocks: HashMap<BlockType, BlockCapability>,
	fallback: BlockCapability,
}

impl BlockRegistry {
	/// Create a new, empty registry
	pub fn new() -> Self {
		Self {
			blocks: HashMap::new(),
			fallback: BlockCapability::AllFields,
		}
	}

	/// Register a block type
	pub fn register(&mut self, block_type: impl Into<BlockType>, capability: BlockCapability) -> &mut Self {
		self.blocks.insert(block_type.into(), capability);
		self
	}

	/// Register a pass-through JSON block type
	pub fn register_json(&mut self, block_type: impl Into<BlockType>) -> &mut Self {
		self.register(block_type, BlockCapability::JsonConfig)
	}

	/// Register a rich-text block type
	pub fn register_rich_text(&mut self, block_type: impl Into<BlockType>) -> &mut Self {
		self.register(block_type, BlockCapability::RichText)
	}

	/// Register the editable fields of a block type
	pub fn register_fields<I, S>(&mut self, block_type: impl Into<BlockType>, fields: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let fields = fields.into_iter().map(Into::into).collect();
		self.register(block_type, BlockCapability::FormFields(fields))
	}

	/// Register a serialization routine for a block type
	pub fn register_serializer<S>(&mut self, block_type: impl Into<BlockType>, serializer: S) -> &mut Self
	where
		S: BlockSerializer + 'static,
	{
		self.register(block_type, BlockCapability::Custom(Arc::new(serializer)))
	}

	/// Capability used for unregistered, non-JSON block types
	pub fn set_fallback(&mut self, capability: BlockCapability) -> &mut Self {
		self.fallback = capability;
		self
	}

	/// Get the capability registered for a block type
	pub fn get(&self, block_type: &str) -> Option<&BlockCapability> {
		self.blocks.get(block_type)
	}

	/// Capability to export a payload with.
	///
	/// Unregistered block types with a JSON config are treated as JSON blocks,
	/// the rest use the fallback capability.
	pub fn resolve(&self, payload: &BlockPayload) -> &BlockCapability {
		if let Some(capability) = self.blocks.get(&payload.block_type) {
			return capability;
		}
		if payload.json_config.is_some() {
			&JSON_CONFIG
		} else {
			&self.fallback
		}
	}

	/// Builds the config mapping of a block payload.
	pub fn export(&self, payload: &BlockPayload, codec: &ReferenceCodec) -> TransferResult<Config> {
		self.resolve(payload).export(payload, codec)
	}
}

impl Default for BlockRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::host::Entity;
	use crate::reference::FieldValue;
	use indexmap::IndexMap;
	use rstest::rstest;
	use serde_json::json;

	fn fields(entries: Vec<(&str, FieldValue)>) -> IndexMap<String, FieldValue> {
		entries
			.into_iter()
			.map(|(name, value)| (name.to_string(), value))
			.collect()
	}

	#[rstest]
	fn test_json_block_copies_config_under_sentinel() {
		let registry = BlockRegistry::new();
		let payload = BlockPayload::json(
			"PlusPlugin",
			json!({"link": {"internal_link": "cms.page:/about/"}})
				.as_object()
				.cloned()
				.unwrap(),
		);

		let config = registry.export(&payload, &ReferenceCodec::default()).unwrap();

		assert_eq!(
			Value::Object(config),
			json!({"_json": {"link": {"internal_link": "cms.page:/about/"}}})
		);
	}

	#[rstest]
	fn test_rich_text_emits_exactly_three_keys() {
		let mut registry = BlockRegistry::new();
		registry.register_rich_text("TextPlugin");
		let payload = BlockPayload::fields(
			"TextPlugin",
			fields(vec![
				("body", FieldValue::from("<p>Hi</p>")),
				("rte", FieldValue::from("ckeditor")),
				("internal", FieldValue::Opaque("Cache".into())),
			]),
		);

		let config = registry.export(&payload, &ReferenceCodec::default()).unwrap();

		assert_eq!(
			Value::Object(config),
			json!({"body": "<p>Hi</p>", "json": null, "rte": "ckeditor"})
		);
	}

	#[rstest]
	fn test_form_fields_in_declared_order() {
		let mut registry = BlockRegistry::new();
		registry.register_fields("ImagePlugin", ["image", "alt"]);
		let payload = BlockPayload::fields(
			"ImagePlugin",
			fields(vec![
				("alt", FieldValue::from("Logo")),
				("image", FieldValue::Entity(Entity::new("filer.image", 4, "logo.png"))),
				("cache", FieldValue::Opaque("Cache".into())),
			]),
		);

		let config = registry.export(&payload, &ReferenceCodec::default()).unwrap();

		let keys: Vec<&str> = config.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["image", "alt"]);
		assert_eq!(config["image"]["model"], json!("filer.image"));
	}

	#[rstest]
	fn test_custom_serializer() {
		let mut registry = BlockRegistry::new();
		registry.register_serializer("MapPlugin", |payload: &BlockPayload, _: &ReferenceCodec| -> TransferResult<Config> {
			let mut config = Config::new();
			config.insert("kind".to_string(), json!(payload.block_type.to_lowercase()));
			Ok(config)
		});
		let payload = BlockPayload::fields("MapPlugin", IndexMap::new());

		let config = registry.export(&payload, &ReferenceCodec::default()).unwrap();

		assert_eq!(config["kind"], json!("mapplugin"));
	}

	#[rstest]
	fn test_unregistered_block_uses_fallback() {
		let registry = BlockRegistry::new();
		let payload = BlockPayload::fields("LinkPlugin", fields(vec![("url", FieldValue::from("/x/"))]));

		assert!(matches!(registry.resolve(&payload), BlockCapability::AllFields));
		let config = registry.export(&payload, &ReferenceCodec::default()).unwrap();
		assert_eq!(config["url"], json!("/x/"));
	}

	#[rstest]
	fn test_set_fallback_limits_unregistered_fields() {
		let mut registry = BlockRegistry::new();
		registry.set_fallback(BlockCapability::FormFields(vec!["url".to_string()]));
		let payload = BlockPayload::fields(
			"LinkPlugin",
			fields(vec![
				("target", FieldValue::from("_blank")),
				("url", FieldValue::from("/x/")),
			]),
		);
		let json_payload = BlockPayload::json("PlusPlugin", Config::new());

		let config = registry.export(&payload, &ReferenceCodec::default()).unwrap();

		assert_eq!(Value::Object(config), json!({"url": "/x/"}));
		assert!(matches!(registry.resolve(&json_payload), BlockCapability::JsonConfig));
	}
}
