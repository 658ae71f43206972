use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::host::Entity;

/// Text computed on demand (translated labels and the like).
#[derive(Clone)]
pub struct DeferredText(Arc<dyn Fn() -> String + Send + Sync>);

impl DeferredText {
	/// Wraps a text producer.
	pub fn new(produce: impl Fn() -> String + Send + Sync + 'static) -> Self {
		Self(Arc::new(produce))
	}

	/// Produces the text.
	pub fn resolve(&self) -> String {
		(self.0)()
	}
}

impl fmt::Debug for DeferredText {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("DeferredText(..)")
	}
}

/// A live field value of a block, as handed over by the host.
#[derive(Debug, Clone)]
pub enum FieldValue {
	/// No value.
	Null,
	/// Boolean.
	Bool(bool),
	/// Integer.
	Int(i64),
	/// Floating point number.
	Float(f64),
	/// Text.
	Text(String),
	/// Lazily computed text.
	Deferred(DeferredText),
	/// Timezone-aware date and time.
	DateTime(DateTime<FixedOffset>),
	/// Naive date and time.
	NaiveDateTime(NaiveDateTime),
	/// Calendar date.
	Date(NaiveDate),
	/// Time of day.
	Time(NaiveTime),
	/// Duration.
	Duration(TimeDelta),
	/// Decimal number.
	Decimal(Decimal),
	/// UUID.
	Uuid(Uuid),
	/// Binary data.
	Bytes(Vec<u8>),
	/// Sequence of values.
	List(Vec<FieldValue>),
	/// Mapping of values.
	Map(IndexMap<String, FieldValue>),
	/// Value that is already JSON.
	Json(Value),
	/// Reference to one foreign entity.
	Entity(Entity),
	/// Reference to a set of foreign entities.
	Entities {
		/// Referenced type.
		model: String,
		/// Display string of the set.
		name: String,
		/// Members of the set.
		entities: Vec<Entity>,
	},
	/// A value of a type with no JSON form.
	Opaque(String),
}

impl From<Value> for FieldValue {
	fn from(value: Value) -> Self {
		Self::Json(value)
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<i64> for FieldValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<Entity> for FieldValue {
	fn from(value: Entity) -> Self {
		Self::Entity(value)
	}
}

fn millis_suffix(nanosecond: u32) -> String {
	// Only the millisecond digits are kept, and only when there is a
	// sub-second part at all.
	if nanosecond / 1_000 == 0 {
		String::new()
	} else {
		format!(".{:03}", (nanosecond % 1_000_000_000) / 1_000_000)
	}
}

/// ISO-8601 form of a date-time, at millisecond precision, UTC as `Z`.
pub fn format_datetime(value: &DateTime<FixedOffset>) -> String {
	let offset = value.format("%:z").to_string();
	let offset = if offset == "+00:00" { "Z".to_string() } else { offset };
	format!(
		"{}{}{}",
		value.format("%Y-%m-%dT%H:%M:%S"),
		millis_suffix(value.nanosecond()),
		offset
	)
}

/// ISO-8601 form of a naive date-time, at millisecond precision.
pub(super) fn format_naive_datetime(value: &NaiveDateTime) -> String {
	format!(
		"{}{}",
		value.format("%Y-%m-%dT%H:%M:%S"),
		millis_suffix(value.nanosecond())
	)
}

/// ISO-8601 form of a date.
pub fn format_date(value: &NaiveDate) -> String {
	value.format("%Y-%m-%d").to_string()
}

/// ISO-8601 form of a time of day, at millisecond precision.
pub fn format_time(value: &NaiveTime) -> String {
	format!("{}{}", value.format("%H:%M:%S"), millis_suffix(value.nanosecond()))
}

/// ISO-8601 duration (`P{d}DT{hh}H{mm}M{ss}[.ffffff]S`).
pub fn format_duration(value: &TimeDelta) -> String {
	let (sign, value) = if *value < TimeDelta::zero() {
		("-", -*value)
	} else {
		("", *value)
	};

	let total = value.num_seconds();
	let days = total / 86_400;
	let hours = (total % 86_400) / 3_600;
	let minutes = (total % 3_600) / 60;
	let seconds = total % 60;
	let micros = value.subsec_nanos() / 1_000;
	let fraction = if micros == 0 {
		String::new()
	} else {
		format!(".{:06}", micros)
	};

	format!(
		"{}P{}DT{:02}H{:02}M{:02}{}S",
		sign, days, hours, minutes, seconds, fraction
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use rstest::rstest;

	#[rstest]
	fn test_datetime_utc_becomes_z() {
		let value = FixedOffset::east_opt(0)
			.unwrap()
			.with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
			.unwrap();

		assert_eq!(format_datetime(&value), "2024-01-02T03:04:05Z");
	}

	#[rstest]
	fn test_datetime_truncates_to_millis() {
		let value = FixedOffset::east_opt(2 * 3600)
			.unwrap()
			.with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
			.unwrap() + TimeDelta::microseconds(123_456);

		assert_eq!(format_datetime(&value), "2024-01-02T03:04:05.123+02:00");
	}

	#[rstest]
	fn test_time_with_micros_only() {
		let value = NaiveTime::from_hms_micro_opt(10, 0, 0, 42).unwrap();
		assert_eq!(format_time(&value), "10:00:00.000");
	}

	#[rstest]
	#[case(TimeDelta::days(1) + TimeDelta::hours(2) + TimeDelta::minutes(3) + TimeDelta::seconds(4), "P1DT02H03M04S")]
	#[case(TimeDelta::seconds(90) + TimeDelta::microseconds(5), "P0DT00H01M30.000005S")]
	#[case(TimeDelta::zero(), "P0DT00H00M00S")]
	#[case(-TimeDelta::minutes(5), "-P0DT00H05M00S")]
	fn test_duration(#[case] value: TimeDelta, #[case] expected: &str) {
		assert_eq!(format_duration(&value), expected);
	}

	#[rstest]
	fn test_deferred_text_resolves_lazily() {
		let text = DeferredText::new(|| "Read more".to_string());
		assert_eq!(text.resolve(), "Read more");
		assert_eq!(format!("{:?}", text), "DeferredText(..)");
	}
}
