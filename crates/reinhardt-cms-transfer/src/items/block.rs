//! Content block (plugin) items.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Config, TransferItem, collect_blocks, null_as_default, visit_blocks_mut};

/// Config key marking a pass-through JSON block.
///
/// A block whose config holds this key carries its whole configuration under
/// it. Such configs are never field-mapped and never reference-resolved on
/// import.
pub const JSON_CONFIG_KEY: &str = "_json";

/// A content block and its nested children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlockItem {
	/// Item tag (`"plugin"`).
	#[serde(rename = "type", default = "default_type")]
	pub item_type: String,

	/// Block type as registered in the destination system.
	#[serde(rename = "plugin_type")]
	pub block_type: String,

	/// Identifier of the live block created by an import.
	///
	/// Absent until the block has been imported.
	#[serde(default, with = "block_id")]
	pub id: Option<i64>,

	/// Block configuration, possibly containing reference descriptors.
	#[serde(default, deserialize_with = "null_as_default")]
	pub config: Config,

	/// Nested blocks in position order.
	#[serde(default, deserialize_with = "null_as_default")]
	pub children: Vec<ContentBlockItem>,
}

fn default_type() -> String {
	"plugin".to_string()
}

impl ContentBlockItem {
	/// Creates an empty, not yet imported block item.
	pub fn new(block_type: impl Into<String>) -> Self {
		Self {
			item_type: default_type(),
			block_type: block_type.into(),
			id: None,
			config: Config::new(),
			children: Vec::new(),
		}
	}

	/// Sets the block configuration.
	pub fn with_config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	/// Appends a child block.
	pub fn with_child(mut self, child: ContentBlockItem) -> Self {
		self.children.push(child);
		self
	}

	/// Returns true once the block has been created in a destination.
	pub fn is_imported(&self) -> bool {
		self.id.is_some()
	}

	/// Records the identifier of the live block.
	///
	/// The identifier is written once; later calls keep the first value and
	/// return `false`. Negative identifiers read back as absent, so they are
	/// refused.
	pub fn assign_id(&mut self, id: i64) -> bool {
		if id < 0 {
			tracing::warn!(block_type = %self.block_type, id, "Refusing negative block id");
			return false;
		}
		if let Some(existing) = self.id {
			tracing::warn!(
				block_type = %self.block_type,
				existing,
				ignored = id,
				"Block item already carries an imported id"
			);
			return false;
		}
		self.id = Some(id);
		true
	}

	/// Returns true for pass-through JSON blocks.
	pub fn is_json_config(&self) -> bool {
		self.config.contains_key(JSON_CONFIG_KEY)
	}

	/// The pass-through JSON config, if this is a JSON block.
	pub fn json_config(&self) -> Option<&Config> {
		self.config.get(JSON_CONFIG_KEY).and_then(Value::as_object)
	}

	/// Mutable access to the pass-through JSON config.
	pub fn json_config_mut(&mut self) -> Option<&mut Config> {
		self.config
			.get_mut(JSON_CONFIG_KEY)
			.and_then(Value::as_object_mut)
	}

	/// The mapping whose values may hold reference descriptors.
	///
	/// For JSON blocks the descriptors live one level deeper, inside the
	/// pass-through config.
	pub fn reference_scope(&self) -> Option<&Config> {
		if self.is_json_config() {
			self.json_config()
		} else {
			Some(&self.config)
		}
	}

	/// Mutable counterpart of [`reference_scope`](Self::reference_scope).
	pub fn reference_scope_mut(&mut self) -> Option<&mut Config> {
		if self.is_json_config() {
			self.json_config_mut()
		} else {
			Some(&mut self.config)
		}
	}
}

impl TransferItem for ContentBlockItem {
	const VERBOSE_NAME: &'static str = "Plugin Item";

	fn item_type(&self) -> &str {
		&self.item_type
	}

	fn collect_plugins(&self) -> Vec<&ContentBlockItem> {
		let mut blocks = vec![self];
		collect_blocks(&self.children, &mut blocks);
		blocks
	}

	fn visit_plugins_mut(&mut self, visit: &mut dyn FnMut(&mut ContentBlockItem)) {
		visit(self);
		visit_blocks_mut(&mut self.children, visit);
	}
}

impl fmt::Display for ContentBlockItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {} ({})", Self::VERBOSE_NAME, self.item_type, self.block_type)
	}
}

/// Persisted form of the optional block id.
///
/// Written as `null` when absent. Negative numbers (`-1` in documents from
/// older exports) read back as absent.
mod block_id {
	use serde::{Deserialize, Deserializer, Serializer};

	pub(super) fn serialize<S: Serializer>(id: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error> {
		match id {
			Some(id) => serializer.serialize_i64(*id),
			None => serializer.serialize_none(),
		}
	}

	pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
		Ok(Option::<i64>::deserialize(deserializer)?.filter(|id| *id >= 0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn tree() -> ContentBlockItem {
		ContentBlockItem::new("Row")
			.with_child(ContentBlockItem::new("Column").with_child(ContentBlockItem::new("Text")))
			.with_child(ContentBlockItem::new("Image"))
	}

	#[rstest]
	fn test_collect_plugins_pre_order() {
		let root = tree();

		let order: Vec<&str> = root
			.collect_plugins()
			.iter()
			.map(|block| block.block_type.as_str())
			.collect();

		assert_eq!(order, vec!["Row", "Column", "Text", "Image"]);
	}

	#[rstest]
	fn test_visit_plugins_mut_same_order() {
		let mut root = tree();
		let mut seen = Vec::new();

		root.visit_plugins_mut(&mut |block: &mut ContentBlockItem| seen.push(block.block_type.clone()));

		assert_eq!(seen, vec!["Row", "Column", "Text", "Image"]);
	}

	#[rstest]
	fn test_assign_id_once() {
		let mut block = ContentBlockItem::new("Text");
		assert!(!block.is_imported());

		assert!(block.assign_id(7));
		assert!(!block.assign_id(9));

		assert_eq!(block.id, Some(7));
	}

	#[rstest]
	#[case(-1)]
	#[case(i64::MIN)]
	fn test_assign_id_refuses_negative(#[case] id: i64) {
		let mut block = ContentBlockItem::new("Text");

		assert!(!block.assign_id(id));

		assert_eq!(block.id, None);
		let restored = ContentBlockItem::from_dict(&block.asdict().unwrap()).unwrap();
		assert!(!restored.is_imported());
		assert!(block.assign_id(0));
		assert_eq!(block.id, Some(0));
	}

	#[rstest]
	fn test_legacy_negative_id_reads_as_absent() {
		let block: ContentBlockItem = serde_json::from_value(json!({
			"type": "plugin",
			"plugin_type": "TextPlugin",
			"id": -1,
			"config": {},
			"children": []
		}))
		.unwrap();

		assert_eq!(block.id, None);
	}

	#[rstest]
	fn test_absent_id_written_as_null() {
		let block = ContentBlockItem::new("TextPlugin");
		let data = block.asdict().unwrap();
		assert_eq!(data["id"], Value::Null);
		assert_eq!(data["plugin_type"], json!("TextPlugin"));
	}

	#[rstest]
	fn test_reference_scope_of_json_block() {
		let block = ContentBlockItem::new("PlusPlugin").with_config(
			json!({"_json": {"image": {"model": "filer.image", "pk": 1}}})
				.as_object()
				.cloned()
				.unwrap(),
		);

		let scope = block.reference_scope().unwrap();
		assert!(scope.contains_key("image"));
		assert!(!scope.contains_key(JSON_CONFIG_KEY));
	}
}
