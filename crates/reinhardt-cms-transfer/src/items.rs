//! Transfer items.
//!
//! A transfer item is a node of the portable content tree: a page with its
//! localized contents, the slots (placeholders) of each content and the nested
//! content blocks (plugins) inside each slot. Aliases ("snippets") have the
//! same shape with their own container items.
//!
//! Every item converts to a plain JSON mapping with [`TransferItem::asdict`]
//! and back with [`TransferItem::from_dict`]. The field layout of each variant
//! is declared once on the struct itself: nested items and lists of items are
//! typed fields, everything else (block configs, extra context) is carried as
//! raw JSON and copied verbatim.
//!
//! ```text
//! PageItem
//! ├── page_contents: [LocalizedContentItem]
//! │   └── placeholders: [SlotItem]
//! │       └── plugins: [ContentBlockItem]
//! │           └── children: [ContentBlockItem] ...
//! └── pages: [PageItem] ...
//! ```

mod block;
mod page;
mod slot;
mod snippet;

pub use block::{ContentBlockItem, JSON_CONFIG_KEY};
pub use page::{LocalizedContentItem, PageItem};
pub use slot::SlotItem;
pub use snippet::{SnippetContentItem, SnippetItem};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{TransferError, TransferResult};

/// Opaque JSON mapping carried by items (block configs, extra context).
pub type Config = Map<String, Value>;

/// Common behaviour of every exportable node.
pub trait TransferItem: Serialize + DeserializeOwned {
	/// Human-readable name of the variant, used in messages.
	const VERBOSE_NAME: &'static str;

	/// The `type` tag stored on the item.
	fn item_type(&self) -> &str;

	/// All content blocks below this item in depth-first pre-order
	/// (a block precedes its children, siblings keep their order).
	fn collect_plugins(&self) -> Vec<&ContentBlockItem> {
		Vec::new()
	}

	/// Visits all content blocks below this item mutably, in the same order
	/// as [`collect_plugins`](Self::collect_plugins).
	fn visit_plugins_mut(&mut self, _visit: &mut dyn FnMut(&mut ContentBlockItem)) {}

	/// Flattens the item into nested JSON containers.
	fn asdict(&self) -> TransferResult<Config> {
		match serde_json::to_value(self)? {
			Value::Object(map) => Ok(map),
			other => Err(TransferError::InvalidItem(format!(
				"{} did not serialize to a mapping: {}",
				Self::VERBOSE_NAME,
				other
			))),
		}
	}

	/// Rebuilds the item from a mapping produced by [`asdict`](Self::asdict).
	///
	/// Missing optional keys take the variant's defaults, unknown keys are
	/// ignored.
	fn from_dict(data: &Config) -> TransferResult<Self> {
		Self::from_value(Value::Object(data.clone()))
	}

	/// Same as [`from_dict`](Self::from_dict), taking ownership of the data.
	fn from_value(data: Value) -> TransferResult<Self> {
		serde_json::from_value(data).map_err(|source| TransferError::Deserialize {
			item: Self::VERBOSE_NAME,
			source,
		})
	}

	/// Pretty-printed JSON document of this item.
	fn to_json(&self) -> TransferResult<String> {
		Ok(serde_json::to_string_pretty(&self.asdict()?)?)
	}

	/// Parses a JSON document produced by [`to_json`](Self::to_json).
	fn from_json(content: &str) -> TransferResult<Self> {
		match serde_json::from_str::<Value>(content)? {
			value @ Value::Object(_) => Self::from_value(value),
			_ => Err(TransferError::InvalidItem(format!(
				"{} data must be a JSON object",
				Self::VERBOSE_NAME
			))),
		}
	}
}

/// Collects the blocks of a list of blocks in pre-order.
pub(crate) fn collect_blocks<'a>(blocks: &'a [ContentBlockItem], out: &mut Vec<&'a ContentBlockItem>) {
	for block in blocks {
		out.push(block);
		collect_blocks(&block.children, out);
	}
}

/// Visits a list of blocks mutably in pre-order.
pub(crate) fn visit_blocks_mut(
	blocks: &mut [ContentBlockItem],
	visit: &mut dyn FnMut(&mut ContentBlockItem),
) {
	for block in blocks {
		visit(block);
		visit_blocks_mut(&mut block.children, visit);
	}
}

/// Reads `null` as the type's default.
///
/// Source systems store unset strings and empty relations as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn default_true() -> bool {
	true
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_from_json_rejects_non_object() {
		let result = PageItem::from_json("[1, 2]");
		assert!(matches!(result, Err(TransferError::InvalidItem(_))));
	}

	#[rstest]
	fn test_from_dict_reports_variant_on_error() {
		let data = json!({"type": "plugin"});
		let result = ContentBlockItem::from_value(data);
		match result {
			Err(TransferError::Deserialize { item, .. }) => assert_eq!(item, "Plugin Item"),
			other => panic!("Expected Deserialize error, got {:?}", other),
		}
	}

	#[rstest]
	fn test_to_json_is_pretty() {
		let item = SlotItem::new("content");
		let output = item.to_json().unwrap();
		assert!(output.contains("\n  \"slot\": \"content\""));
	}
}
