use std::collections::HashMap;

use indexmap::IndexMap;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Number, Value};

use super::value::{FieldValue, format_date, format_datetime, format_duration, format_naive_datetime, format_time};
use crate::error::{TransferError, TransferResult};
use crate::host::Entity;
use crate::items::Config;
use crate::settings::TransferSettings;

/// Converts live block field values into their persisted JSON form.
///
/// Entity references become descriptors carrying the natural-key attributes
/// the destination can resolve them by: the configured alternate lookup
/// field of the model, and the content hash for the asset model.
#[derive(Debug, Clone)]
pub struct ReferenceCodec {
	lookup_fields: HashMap<String, String>,
	asset_model: String,
	asset_hash_field: String,
}

impl Default for ReferenceCodec {
	fn default() -> Self {
		Self::new(&TransferSettings::default())
	}
}

impl ReferenceCodec {
	/// Creates a codec for the given settings.
	pub fn new(settings: &TransferSettings) -> Self {
		Self {
			lookup_fields: settings.lookup_fields.clone(),
			asset_model: settings.asset_model.clone(),
			asset_hash_field: settings.asset_hash_field.clone(),
		}
	}

	fn natural_keys<'a>(&'a self, model: &str) -> impl Iterator<Item = &'a str> {
		let lookup = self.lookup_fields.get(model).map(String::as_str);
		let hash = (model == self.asset_model).then_some(self.asset_hash_field.as_str());
		lookup.into_iter().chain(hash)
	}

	/// Descriptor of a single entity (`{model, pk, name, ...}`).
	pub fn encode_reference(&self, entity: &Entity) -> Value {
		let mut map = Config::new();
		map.insert("model".to_string(), Value::String(entity.model.clone()));
		map.insert("pk".to_string(), entity.pk.clone());
		map.insert("name".to_string(), Value::String(entity.name.clone()));
		for field in self.natural_keys(&entity.model) {
			if field == "pk" || field == "name" || map.contains_key(field) {
				continue;
			}
			if let Some(value) = entity.fields.get(field) {
				map.insert(field.to_string(), value.clone());
			}
		}
		Value::Object(map)
	}

	/// Descriptor of a set of entities (`{model, p_keys, name}`).
	pub fn encode_queryset(&self, model: &str, name: &str, entities: &[Entity]) -> Value {
		let mut map = Config::new();
		map.insert("model".to_string(), Value::String(model.to_string()));
		map.insert(
			"p_keys".to_string(),
			Value::Array(entities.iter().map(|entity| entity.pk.clone()).collect()),
		);
		map.insert("name".to_string(), Value::String(name.to_string()));
		Value::Object(map)
	}

	/// Coerces a live value to JSON.
	///
	/// Fails with [`TransferError::UnsupportedType`] only for opaque values.
	pub fn coerce(&self, value: &FieldValue) -> TransferResult<Value> {
		Ok(match value {
			FieldValue::Null => Value::Null,
			FieldValue::Bool(value) => Value::Bool(*value),
			FieldValue::Int(value) => Value::from(*value),
			FieldValue::Float(value) => float(*value)?,
			FieldValue::Text(value) => Value::String(value.clone()),
			FieldValue::Deferred(text) => Value::String(text.resolve()),
			FieldValue::DateTime(value) => Value::String(format_datetime(value)),
			FieldValue::NaiveDateTime(value) => Value::String(format_naive_datetime(value)),
			FieldValue::Date(value) => Value::String(format_date(value)),
			FieldValue::Time(value) => Value::String(format_time(value)),
			FieldValue::Duration(value) => Value::String(format_duration(value)),
			FieldValue::Decimal(value) => {
				let as_float = value
					.to_f64()
					.ok_or_else(|| TransferError::UnsupportedType(format!("Decimal({})", value)))?;
				float(as_float)?
			}
			FieldValue::Uuid(value) => Value::String(value.hyphenated().to_string()),
			FieldValue::Bytes(bytes) => Value::String(decode_bytes(bytes)),
			FieldValue::List(values) => Value::Array(
				values
					.iter()
					.map(|value| self.coerce(value))
					.collect::<TransferResult<Vec<_>>>()?,
			),
			FieldValue::Map(values) => Value::Object(self.coerce_fields(values)?),
			FieldValue::Json(value) => value.clone(),
			FieldValue::Entity(entity) => self.encode_reference(entity),
			FieldValue::Entities {
				model,
				name,
				entities,
			} => self.encode_queryset(model, name, entities),
			FieldValue::Opaque(type_name) => {
				return Err(TransferError::UnsupportedType(type_name.clone()));
			}
		})
	}

	/// Coerces every value of a field mapping, keeping the order.
	pub fn coerce_fields(&self, fields: &IndexMap<String, FieldValue>) -> TransferResult<Config> {
		fields
			.iter()
			.map(|(name, value)| Ok((name.clone(), self.coerce(value)?)))
			.collect()
	}
}

fn float(value: f64) -> TransferResult<Value> {
	Number::from_f64(value)
		.map(Value::Number)
		.ok_or_else(|| TransferError::UnsupportedType(format!("float({})", value)))
}

fn decode_bytes(bytes: &[u8]) -> String {
	match std::str::from_utf8(bytes) {
		Ok(text) => text.to_string(),
		Err(error) => {
			tracing::warn!(
				len = bytes.len(),
				valid_up_to = error.valid_up_to(),
				"Binary config value is not valid UTF-8, decoding lossily"
			);
			String::from_utf8_lossy(bytes).into_owned()
		}
	}
}
