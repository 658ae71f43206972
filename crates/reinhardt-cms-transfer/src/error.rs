//! Error types for the transfer crate.
//!
//! Only conditions that stop an operation are errors. Resolution misses,
//! rejected blocks and skipped slots are reported as data
//! (see [`ReferenceMiss`](crate::passes::ReferenceMiss),
//! [`LinkMiss`](crate::passes::LinkMiss) and
//! [`BlockFailure`](crate::importer::BlockFailure)).

use thiserror::Error;

/// Errors that can occur while exporting, importing or rewriting transfer items.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TransferError {
	/// A persisted mapping could not be turned back into a transfer item.
	#[error("Cannot load {item} from data: {source}")]
	Deserialize {
		/// Verbose name of the item being loaded.
		item: &'static str,
		/// Underlying serde error.
		#[source]
		source: serde_json::Error,
	},

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// A config value has no JSON representation.
	#[error("Object of type {0} is not JSON serializable")]
	UnsupportedType(String),

	/// The host system rejected an operation.
	#[error("Host error: {0}")]
	Host(String),

	/// The entity type is not known to the catalog.
	#[error("Model not found: {0}")]
	UnknownModel(String),

	/// The link-rewrite pass has no page to point broken links at.
	#[error("Backup page with reverse_id \"{0}\" not found")]
	MissingFallback(String),

	/// The object to export does not exist.
	#[error("Not found: {0}")]
	NotFound(String),

	/// The item cannot be used for the requested operation.
	#[error("Invalid item: {0}")]
	InvalidItem(String),

	/// Settings could not be loaded or are inconsistent.
	#[error("Settings error: {0}")]
	Settings(String),

	/// TOML settings file could not be parsed.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Result type alias for transfer operations.
pub type TransferResult<T> = Result<T, TransferError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_missing_fallback_message() {
		let error = TransferError::MissingFallback("error-404".to_string());
		assert_eq!(
			error.to_string(),
			"Backup page with reverse_id \"error-404\" not found"
		);
	}

	#[rstest]
	fn test_unsupported_type_message() {
		let error = TransferError::UnsupportedType("Socket".to_string());
		assert_eq!(
			error.to_string(),
			"Object of type Socket is not JSON serializable"
		);
	}

	#[rstest]
	fn test_json_error_from() {
		let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let error: TransferError = json_error.into();
		assert!(matches!(error, TransferError::Json(_)));
	}
}
