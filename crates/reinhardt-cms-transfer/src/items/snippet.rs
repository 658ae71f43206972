//! Alias (snippet) items.
//!
//! Aliases are reusable content fragments. They have no page tree, just a
//! category and one content per language.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ContentBlockItem, SlotItem, TransferItem, null_as_default};

/// One language variant of an alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetContentItem {
	/// Item tag (`"aliascontent"`).
	#[serde(rename = "type", default = "default_content_type")]
	pub item_type: String,

	/// Language code.
	pub language: String,

	/// Alias name in this language.
	pub name: String,

	/// Template identifier.
	#[serde(default, deserialize_with = "null_as_default")]
	pub template: String,

	/// Slots of the alias content.
	#[serde(rename = "placeholders", default, deserialize_with = "null_as_default")]
	pub slots: Vec<SlotItem>,
}

fn default_content_type() -> String {
	"aliascontent".to_string()
}

impl SnippetContentItem {
	/// Creates a content item without slots.
	pub fn new(language: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			item_type: default_content_type(),
			language: language.into(),
			name: name.into(),
			template: String::new(),
			slots: Vec::new(),
		}
	}

	/// Appends a slot.
	pub fn with_slot(mut self, slot: SlotItem) -> Self {
		self.slots.push(slot);
		self
	}
}

impl TransferItem for SnippetContentItem {
	const VERBOSE_NAME: &'static str = "Alias Content Item";

	fn item_type(&self) -> &str {
		&self.item_type
	}

	fn collect_plugins(&self) -> Vec<&ContentBlockItem> {
		self.slots.iter().flat_map(SlotItem::collect_plugins).collect()
	}

	fn visit_plugins_mut(&mut self, visit: &mut dyn FnMut(&mut ContentBlockItem)) {
		for slot in &mut self.slots {
			slot.visit_plugins_mut(visit);
		}
	}
}

impl fmt::Display for SnippetContentItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: {} ({}, {})",
			Self::VERBOSE_NAME,
			self.item_type,
			self.name,
			self.language
		)
	}
}

/// An alias with all its language variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetItem {
	/// Item tag (`"alias"`).
	#[serde(rename = "type", default = "default_type")]
	pub item_type: String,

	/// Identifier of the alias in the source system.
	#[serde(rename = "alias_id")]
	pub snippet_id: i64,

	/// Category name.
	#[serde(default, deserialize_with = "null_as_default")]
	pub category: String,

	/// Language codes the alias is available in.
	#[serde(default, deserialize_with = "null_as_default")]
	pub languages: Vec<String>,

	/// Contents. The first one is created together with the alias.
	#[serde(rename = "alias_contents", default, deserialize_with = "null_as_default")]
	pub contents: Vec<SnippetContentItem>,
}

fn default_type() -> String {
	"alias".to_string()
}

impl SnippetItem {
	/// Creates an empty alias item.
	pub fn new(snippet_id: i64, category: impl Into<String>) -> Self {
		Self {
			item_type: default_type(),
			snippet_id,
			category: category.into(),
			languages: Vec::new(),
			contents: Vec::new(),
		}
	}

	/// Appends a content.
	pub fn with_content(mut self, content: SnippetContentItem) -> Self {
		if !self.languages.contains(&content.language) {
			self.languages.push(content.language.clone());
		}
		self.contents.push(content);
		self
	}
}

impl TransferItem for SnippetItem {
	const VERBOSE_NAME: &'static str = "Alias Item";

	fn item_type(&self) -> &str {
		&self.item_type
	}

	fn collect_plugins(&self) -> Vec<&ContentBlockItem> {
		self.contents
			.iter()
			.flat_map(SnippetContentItem::collect_plugins)
			.collect()
	}

	fn visit_plugins_mut(&mut self, visit: &mut dyn FnMut(&mut ContentBlockItem)) {
		for content in &mut self.contents {
			content.visit_plugins_mut(visit);
		}
	}
}

impl fmt::Display for SnippetItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {} ({})", Self::VERBOSE_NAME, self.item_type, self.category)
	}
}
