//! Page and localized page content items.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ContentBlockItem, SlotItem, TransferItem, default_true, null_as_default};

/// One language variant of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedContentItem {
	/// Item tag (`"pagecontent"`).
	#[serde(rename = "type", default = "default_content_type")]
	pub item_type: String,

	/// Language code.
	pub language: String,

	/// Title.
	pub title: String,

	/// Slug.
	pub slug: String,

	/// Title used in the HTML head.
	#[serde(default, deserialize_with = "null_as_default")]
	pub page_title: String,

	/// Title used in menus.
	#[serde(default, deserialize_with = "null_as_default")]
	pub menu_title: String,

	/// Meta description.
	#[serde(default, deserialize_with = "null_as_default")]
	pub meta_description: String,

	/// Whether the page is shown in navigation.
	#[serde(default = "default_true")]
	pub in_navigation: bool,

	/// Template identifier.
	#[serde(default, deserialize_with = "null_as_default")]
	pub template: String,

	/// Slots in template order.
	#[serde(rename = "placeholders", default, deserialize_with = "null_as_default")]
	pub slots: Vec<SlotItem>,
}

fn default_content_type() -> String {
	"pagecontent".to_string()
}

impl LocalizedContentItem {
	/// Creates a content item without slots.
	pub fn new(language: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
		Self {
			item_type: default_content_type(),
			language: language.into(),
			title: title.into(),
			slug: slug.into(),
			page_title: String::new(),
			menu_title: String::new(),
			meta_description: String::new(),
			in_navigation: true,
			template: String::new(),
			slots: Vec::new(),
		}
	}

	/// Sets the template identifier.
	pub fn with_template(mut self, template: impl Into<String>) -> Self {
		self.template = template.into();
		self
	}

	/// Appends a slot.
	pub fn with_slot(mut self, slot: SlotItem) -> Self {
		self.slots.push(slot);
		self
	}
}

impl TransferItem for LocalizedContentItem {
	const VERBOSE_NAME: &'static str = "Page Content Item";

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

impl fmt::Display for LocalizedContentItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: {} ({}, {})",
			Self::VERBOSE_NAME,
			self.item_type,
			self.title,
			self.language
		)
	}
}

/// A page, its localized contents and optionally its subpages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageItem {
	/// Item tag (`"page"`).
	#[serde(rename = "type", default = "default_page_type")]
	pub item_type: String,

	/// Identifier of the page in the source system.
	pub page_id: i64,

	/// Symbolic identifier (reverse id), if any.
	#[serde(default)]
	pub reverse_id: Option<String>,

	/// Title.
	#[serde(default, deserialize_with = "null_as_default")]
	pub title: String,

	/// Template identifier.
	#[serde(default, deserialize_with = "null_as_default")]
	pub template: String,

	/// Whether the page is shown in navigation.
	#[serde(default = "default_true")]
	pub in_navigation: bool,

	/// Language codes the page is available in.
	#[serde(default, deserialize_with = "null_as_default")]
	pub languages: Vec<String>,

	/// Localized contents. The first one is created together with the page.
	#[serde(rename = "page_contents", default, deserialize_with = "null_as_default")]
	pub contents: Vec<LocalizedContentItem>,

	/// Subpages (recursive exports only).
	#[serde(default, deserialize_with = "null_as_default")]
	pub pages: Vec<PageItem>,
}

fn default_page_type() -> String {
	"page".to_string()
}

impl PageItem {
	/// Creates an empty page item.
	pub fn new(page_id: i64) -> Self {
		Self {
			item_type: default_page_type(),
			page_id,
			reverse_id: None,
			title: String::new(),
			template: String::new(),
			in_navigation: true,
			languages: Vec::new(),
			contents: Vec::new(),
			pages: Vec::new(),
		}
	}

	/// Appends a localized content.
	pub fn with_content(mut self, content: LocalizedContentItem) -> Self {
		if !self.languages.contains(&content.language) {
			self.languages.push(content.language.clone());
		}
		self.contents.push(content);
		self
	}

	/// Appends a subpage.
	pub fn with_page(mut self, page: PageItem) -> Self {
		self.pages.push(page);
		self
	}

	/// Number of pages in this subtree, including this one.
	pub fn page_count(&self) -> usize {
		1 + self.pages.iter().map(PageItem::page_count).sum::<usize>()
	}
}

impl TransferItem for PageItem {
	const VERBOSE_NAME: &'static str = "Page Item";

	fn item_type(&self) -> &str {
		&self.item_type
	}

	fn collect_plugins(&self) -> Vec<&ContentBlockItem> {
		let mut blocks: Vec<&ContentBlockItem> = self
			.contents
			.iter()
			.flat_map(LocalizedContentItem::collect_plugins)
			.collect();
		for page in &self.pages {
			blocks.extend(page.collect_plugins());
		}
		blocks
	}

	fn visit_plugins_mut(&mut self, visit: &mut dyn FnMut(&mut ContentBlockItem)) {
		for content in &mut self.contents {
			content.visit_plugins_mut(visit);
		}
		for page in &mut self.pages {
			page.visit_plugins_mut(visit);
		}
	}
}

impl fmt::Display for PageItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {} ({})", Self::VERBOSE_NAME, self.item_type, self.page_id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_from_dict_defaults_and_unknown_keys() {
		let data = json!({
			"type": "page",
			"page_id": 3,
			"unexpected": {"kept": false},
			"page_contents": [
				{"language": "de", "title": "Start", "slug": "start", "page_title": null}
			]
		});

		let page = PageItem::from_value(data).unwrap();

		assert_eq!(page.reverse_id, None);
		assert!(page.in_navigation);
		assert!(page.pages.is_empty());
		assert_eq!(page.contents[0].item_type, "pagecontent");
		assert_eq!(page.contents[0].page_title, "");
		assert!(page.contents[0].slots.is_empty());
	}

	#[rstest]
	fn test_collect_plugins_walks_contents_then_subpages() {
		let page = PageItem::new(1)
			.with_content(
				LocalizedContentItem::new("en", "Home", "home")
					.with_slot(SlotItem::new("content").with_block(ContentBlockItem::new("A"))),
			)
			.with_page(PageItem::new(2).with_content(
				LocalizedContentItem::new("en", "Sub", "sub")
					.with_slot(SlotItem::new("content").with_block(ContentBlockItem::new("B"))),
			));

		let types: Vec<&str> = page
			.collect_plugins()
			.iter()
			.map(|block| block.block_type.as_str())
			.collect();

		assert_eq!(types, vec!["A", "B"]);
		assert_eq!(page.page_count(), 2);
	}

	#[rstest]
	fn test_with_content_tracks_languages() {
		let page = PageItem::new(1)
			.with_content(LocalizedContentItem::new("en", "Home", "home"))
			.with_content(LocalizedContentItem::new("de", "Start", "start"));

		assert_eq!(page.languages, vec!["en", "de"]);
	}
}
