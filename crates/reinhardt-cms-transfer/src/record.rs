//! Persisted transfer records.
//!
//! A record is one row of the host's key-value store: the JSON document of a
//! root item plus the administrative metadata around it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{TransferError, TransferResult};
use crate::host::{PageId, SnippetId};
use crate::items::TransferItem;

/// What a record holds and which actions apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
	/// A page exported from this instance.
	PageExport,
	/// A page document to import into this instance.
	PageImport,
	/// An alias exported from this instance.
	SnippetExport,
	/// An alias document to import into this instance.
	SnippetImport,
}

impl fmt::Display for TransferKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::PageExport => "Page Export",
			Self::PageImport => "Page Import",
			Self::SnippetExport => "Alias Export",
			Self::SnippetImport => "Alias Import",
		};
		f.write_str(name)
	}
}

/// A stored transfer document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
	/// Storage identifier, assigned by the store.
	#[serde(default)]
	pub id: Option<i64>,

	/// Record kind.
	pub kind: TransferKind,

	/// Human label.
	#[serde(default)]
	pub label: String,

	/// The root item's `asdict()` output, `null` until exported.
	#[serde(default)]
	pub data: Value,

	/// Last modification time.
	pub modified_at: DateTime<Utc>,

	/// Exported page, or the parent the import is placed under.
	#[serde(default)]
	pub page: Option<PageId>,

	/// Exported alias.
	#[serde(default)]
	pub snippet: Option<SnippetId>,

	/// Whether the page export includes subpages.
	#[serde(default)]
	pub recursive: bool,
}

impl TransferRecord {
	fn new(kind: TransferKind, label: impl Into<String>) -> Self {
		Self {
			id: None,
			kind,
			label: label.into(),
			data: Value::Null,
			modified_at: Utc::now(),
			page: None,
			snippet: None,
			recursive: false,
		}
	}

	/// Record for exporting `page`.
	pub fn page_export(page: PageId, label: impl Into<String>) -> Self {
		Self {
			page: Some(page),
			..Self::new(TransferKind::PageExport, label)
		}
	}

	/// Record for importing `data` below `parent`.
	pub fn page_import(data: Value, parent: Option<PageId>, label: impl Into<String>) -> Self {
		Self {
			data,
			page: parent,
			..Self::new(TransferKind::PageImport, label)
		}
	}

	/// Record for exporting `snippet`.
	pub fn snippet_export(snippet: SnippetId, label: impl Into<String>) -> Self {
		Self {
			snippet: Some(snippet),
			..Self::new(TransferKind::SnippetExport, label)
		}
	}

	/// Record for importing alias `data`.
	pub fn snippet_import(data: Value, label: impl Into<String>) -> Self {
		Self {
			data,
			..Self::new(TransferKind::SnippetImport, label)
		}
	}

	/// Includes subpages in a page export.
	pub fn with_recursive(mut self, recursive: bool) -> Self {
		self.recursive = recursive;
		self
	}

	/// Marks the record as modified now.
	pub fn touch(&mut self) {
		self.modified_at = Utc::now();
	}

	/// Fails unless the record is of one of `kinds`.
	pub fn expect_kind(&self, kinds: &[TransferKind]) -> TransferResult<()> {
		if kinds.contains(&self.kind) {
			Ok(())
		} else {
			Err(TransferError::InvalidItem(format!(
				"{} record \"{}\" does not support this action",
				self.kind, self.label
			)))
		}
	}

	/// Loads the stored document.
	pub fn load<T: TransferItem>(&self) -> TransferResult<T> {
		if !self.data.is_object() {
			return Err(TransferError::InvalidItem(format!(
				"{} record \"{}\" holds no {}",
				self.kind,
				self.label,
				T::VERBOSE_NAME
			)));
		}
		T::from_value(self.data.clone())
	}

	/// Stores `item` as the record's document.
	pub fn store<T: TransferItem>(&mut self, item: &T) -> TransferResult<()> {
		self.data = Value::Object(item.asdict()?);
		self.touch();
		Ok(())
	}
}

impl fmt::Display for TransferRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.label.is_empty() {
			write!(f, "{}", self.kind)
		} else {
			write!(f, "{}: {}", self.kind, self.label)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::items::{LocalizedContentItem, PageItem};
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_store_then_load() {
		let mut record = TransferRecord::page_export(3, "Home");
		let before = record.modified_at;
		let page = PageItem::new(3).with_content(LocalizedContentItem::new("en", "Home", "home"));

		record.store(&page).unwrap();
		let loaded: PageItem = record.load().unwrap();

		assert_eq!(loaded, page);
		assert!(record.modified_at >= before);
		assert_eq!(record.data["page_id"], json!(3));
	}

	#[rstest]
	fn test_load_without_data() {
		let record = TransferRecord::page_export(3, "Home");
		let result = record.load::<PageItem>();
		assert!(matches!(result, Err(TransferError::InvalidItem(_))));
	}

	#[rstest]
	fn test_expect_kind() {
		let record = TransferRecord::snippet_import(json!({}), "Footer");

		assert!(record.expect_kind(&[TransferKind::SnippetImport]).is_ok());
		assert!(matches!(
			record.expect_kind(&[TransferKind::PageImport]),
			Err(TransferError::InvalidItem(_))
		));
	}

	#[rstest]
	fn test_record_serializes_kind_snake_case() {
		let record = TransferRecord::page_import(json!({"page_id": 1}), Some(9), "Import");

		let value = serde_json::to_value(&record).unwrap();

		assert_eq!(value["kind"], json!("page_import"));
		assert_eq!(value["page"], json!(9));
		assert_eq!(record.to_string(), "Page Import: Import");
	}
}
