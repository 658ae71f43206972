//! Transfer settings.
//!
//! Settings can be built in code, loaded from a `.toml` or `.json` file, or
//! read from `REINHARDT_TRANSFER_*` environment variables.
//!
//! ```toml
//! snippet_model = "djangocms_alias.alias"
//! fallback_reverse_id = "error-404"
//!
//! [lookup_fields]
//! "catalog.product" = "code"
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{TransferError, TransferResult};

const ENV_PREFIX: &str = "REINHARDT_TRANSFER_";

/// Settings shared by the exporters, importers and passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferSettings {
	/// Model name to alternate lookup field. A descriptor of a listed model
	/// carrying that field is resolved by it instead of by primary key.
	pub lookup_fields: HashMap<String, String>,

	/// Alias model, resolved by name.
	pub snippet_model: String,

	/// Field holding an alias's name.
	pub snippet_name_field: String,

	/// Binary-asset model whose descriptors fall back to a content-hash lookup.
	pub asset_model: String,

	/// Content-hash field of [`asset_model`](Self::asset_model).
	pub asset_hash_field: String,

	/// Model of link targets and of the fallback page.
	pub page_model: String,

	/// Reverse id of the page broken links are redirected to.
	pub fallback_reverse_id: String,

	/// Author recorded on created localized contents.
	pub created_by: String,

	/// Whether exports include subpages by default.
	pub recursive_export: bool,
}

impl Default for TransferSettings {
	fn default() -> Self {
		Self {
			lookup_fields: HashMap::new(),
			snippet_model: "djangocms_alias.alias".to_string(),
			snippet_name_field: "name".to_string(),
			asset_model: "filer.image".to_string(),
			asset_hash_field: "sha1".to_string(),
			page_model: "cms.page".to_string(),
			fallback_reverse_id: "error-404".to_string(),
			created_by: "cmstransfer".to_string(),
			recursive_export: false,
		}
	}
}

impl TransferSettings {
	/// Registers an alternate lookup field for a model.
	pub fn with_lookup_field(mut self, model: impl Into<String>, field: impl Into<String>) -> Self {
		self.lookup_fields.insert(model.into(), field.into());
		self
	}

	/// Alternate lookup field configured for `model`.
	pub fn lookup_field(&self, model: &str) -> Option<&str> {
		self.lookup_fields.get(model).map(String::as_str)
	}

	/// Validate settings
	pub fn validate(&self) -> TransferResult<()> {
		let models = [
			("snippet_model", &self.snippet_model),
			("asset_model", &self.asset_model),
			("page_model", &self.page_model),
		];
		for (key, model) in models {
			check_model_name(key, model)?;
		}
		for (model, field) in &self.lookup_fields {
			check_model_name("lookup_fields", model)?;
			if field.is_empty() {
				return Err(TransferError::Settings(format!(
					"lookup_fields: empty field name for {}",
					model
				)));
			}
		}
		if self.asset_hash_field.is_empty() {
			return Err(TransferError::Settings(
				"asset_hash_field must not be empty".to_string(),
			));
		}
		if self.fallback_reverse_id.is_empty() {
			return Err(TransferError::Settings(
				"fallback_reverse_id must not be empty".to_string(),
			));
		}
		Ok(())
	}

	/// Load settings from environment variables
	pub fn from_env() -> TransferResult<Self> {
		Self::from_vars(std::env::vars())
	}

	/// Applies `REINHARDT_TRANSFER_*` variables from `vars` over the defaults.
	///
	/// `LOOKUP_FIELDS` takes comma-separated `model=field` pairs.
	pub fn from_vars<I, K, V>(vars: I) -> TransferResult<Self>
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		let mut settings = Self::default();

		for (key, value) in vars {
			let Some(name) = key.as_ref().strip_prefix(ENV_PREFIX) else {
				continue;
			};
			let value: String = value.into();
			match name {
				"LOOKUP_FIELDS" => {
					for pair in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
						let (model, field) = pair.split_once('=').ok_or_else(|| {
							TransferError::Settings(format!(
								"{}LOOKUP_FIELDS: expected model=field, got {:?}",
								ENV_PREFIX, pair
							))
						})?;
						settings
							.lookup_fields
							.insert(model.trim().to_string(), field.trim().to_string());
					}
				}
				"SNIPPET_MODEL" => settings.snippet_model = value,
				"SNIPPET_NAME_FIELD" => settings.snippet_name_field = value,
				"ASSET_MODEL" => settings.asset_model = value,
				"ASSET_HASH_FIELD" => settings.asset_hash_field = value,
				"PAGE_MODEL" => settings.page_model = value,
				"FALLBACK_REVERSE_ID" => settings.fallback_reverse_id = value,
				"CREATED_BY" => settings.created_by = value,
				"RECURSIVE_EXPORT" => {
					settings.recursive_export = value.to_lowercase() == "true" || value == "1";
				}
				_ => {}
			}
		}

		Ok(settings)
	}

	/// Load settings from a configuration file
	pub fn from_file(path: impl Into<PathBuf>) -> TransferResult<Self> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path)?;

		let settings = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => toml::from_str(&contents)?,
			Some("json") => serde_json::from_str(&contents)?,
			_ => {
				return Err(TransferError::Settings(format!(
					"Unsupported settings file {}. Supported formats: .toml, .json",
					path.display()
				)));
			}
		};

		Ok(settings)
	}
}

fn check_model_name(key: &str, model: &str) -> TransferResult<()> {
	match model.split_once('.') {
		Some((app, name)) if !app.is_empty() && !name.is_empty() => Ok(()),
		_ => Err(TransferError::Settings(format!(
			"{}: {:?} is not an \"app_label.model\" name",
			key, model
		))),
	}
}
