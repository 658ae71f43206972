//! Slot (placeholder) items.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Config, ContentBlockItem, TransferItem, collect_blocks, null_as_default, visit_blocks_mut};

/// A named placement region and its root blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotItem {
	/// Item tag (`"placeholder"`).
	#[serde(rename = "type", default = "default_type")]
	pub item_type: String,

	/// Slot name on the content's template.
	pub slot: String,

	/// Extra template context of the slot.
	#[serde(default, deserialize_with = "null_as_default")]
	pub extra_context: Config,

	/// Root blocks in display order.
	#[serde(rename = "plugins", default, deserialize_with = "null_as_default")]
	pub blocks: Vec<ContentBlockItem>,
}

fn default_type() -> String {
	"placeholder".to_string()
}

impl SlotItem {
	/// Creates an empty slot item.
	pub fn new(slot: impl Into<String>) -> Self {
		Self {
			item_type: default_type(),
			slot: slot.into(),
			extra_context: Config::new(),
			blocks: Vec::new(),
		}
	}

	/// Appends a root block.
	pub fn with_block(mut self, block: ContentBlockItem) -> Self {
		self.blocks.push(block);
		self
	}
}

impl TransferItem for SlotItem {
	const VERBOSE_NAME: &'static str = "Placeholder Item";

	fn item_type(&self) -> &str {
		&self.item_type
	}

	fn collect_plugins(&self) -> Vec<&ContentBlockItem> {
		let mut blocks = Vec::new();
		collect_blocks(&self.blocks, &mut blocks);
		blocks
	}

	fn visit_plugins_mut(&mut self, visit: &mut dyn FnMut(&mut ContentBlockItem)) {
		visit_blocks_mut(&mut self.blocks, visit);
	}
}

impl fmt::Display for SlotItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {} ({})", Self::VERBOSE_NAME, self.item_type, self.slot)
	}
}
