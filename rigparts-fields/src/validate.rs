//! Record validation and numeric coercion.
//!
//! Validation is data-driven from the schema registry: required-ness and
//! numeric coercion come from each `FieldSpec`, never from per-category
//! code. The first missing required field fails the whole record (schema
//! field order), matching the form's fail-fast behavior.

use crate::category::Category;
use crate::error::{Result, ValidationError};
use crate::schema::fields_for;
use crate::types::{CoercedRecord, FieldKind, FieldValue, RawRecord};

/// Validate raw form input against a category's schema and coerce numeric
/// fields. Side-effect free; never touches the store.
///
/// Non-numeric input for a numeric field is rejected with
/// `InvalidNumericValue` rather than coerced to a NaN sentinel.
pub fn validate(category: Category, raw: &RawRecord) -> Result<CoercedRecord> {
    let fields = fields_for(category);

    for field in &fields {
        if field.required && is_blank(raw.get(&field.name)) {
            return Err(ValidationError::missing(&field.name, &field.label));
        }
    }

    let mut values = CoercedRecord::new();
    for field in &fields {
        let Some(input) = raw.get(&field.name) else {
            continue;
        };
        if input.trim().is_empty() {
            continue;
        }

        let value = match field.kind {
            FieldKind::Number { integer: true } => {
                let n: i64 = input
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::invalid_numeric(&field.name, input))?;
                FieldValue::Int(n)
            }
            FieldKind::Number { integer: false } => {
                let n: f64 = input
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::invalid_numeric(&field.name, input))?;
                if !n.is_finite() {
                    return Err(ValidationError::invalid_numeric(&field.name, input));
                }
                FieldValue::Float(n)
            }
            _ => FieldValue::Text(input.to_string()),
        };
        values.insert(&field.name, value);
    }

    Ok(values)
}

fn is_blank(input: Option<&str>) -> bool {
    input.is_none_or(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_cpu() -> RawRecord {
        RawRecord::new()
            .with("name", "x")
            .with("brand", "y")
            .with("price", "100")
            .with("socket", "AM5")
            .with("cores", "6")
            .with("threads", "12")
            .with("base_clock", "3.5GHz")
            .with("boost_clock", "4.5GHz")
            .with("tdp", "65W")
    }

    #[test]
    fn valid_cpu_coerces_numeric_fields() {
        let values = validate(Category::Cpus, &full_cpu()).unwrap();
        assert_eq!(values.get("price"), Some(&FieldValue::Float(100.0)));
        assert_eq!(values.get("cores"), Some(&FieldValue::Int(6)));
        assert_eq!(values.get("threads"), Some(&FieldValue::Int(12)));
        assert_eq!(
            values.get("base_clock"),
            Some(&FieldValue::Text("3.5GHz".into()))
        );
    }

    #[test]
    fn output_follows_schema_field_order() {
        // Raw input in a scrambled order still coerces in schema order.
        let raw = RawRecord::new()
            .with("tdp", "65W")
            .with("name", "x")
            .with("brand", "y")
            .with("price", "100")
            .with("socket", "AM5")
            .with("cores", "6")
            .with("threads", "12")
            .with("base_clock", "3.5GHz")
            .with("boost_clock", "4.5GHz");
        let values = validate(Category::Cpus, &raw).unwrap();
        let names: Vec<&str> = values.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            ["socket", "cores", "threads", "base_clock", "boost_clock", "tdp", "name", "brand", "price"]
        );
    }

    #[test]
    fn first_missing_required_field_wins() {
        let raw = RawRecord::new().with("name", "x");
        let err = validate(Category::Cpus, &raw).unwrap_err();
        // socket is the first required field in cpu schema order
        assert_eq!(err, ValidationError::missing("socket", "Socket"));
    }

    #[test]
    fn missing_brand_reported_when_specific_fields_present() {
        let raw = RawRecord::new()
            .with("socket", "AM5")
            .with("cores", "6")
            .with("threads", "12")
            .with("base_clock", "3.5GHz")
            .with("boost_clock", "4.5GHz")
            .with("tdp", "65W")
            .with("name", "x");
        let err = validate(Category::Cpus, &raw).unwrap_err();
        assert_eq!(err, ValidationError::missing("brand", "Brand"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let raw = full_cpu().with("brand", "   ");
        let err = validate(Category::Cpus, &raw).unwrap_err();
        assert_eq!(err.field(), "brand");
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let raw = full_cpu().with("price", "cheap");
        let err = validate(Category::Cpus, &raw).unwrap_err();
        assert_eq!(err, ValidationError::invalid_numeric("price", "cheap"));
    }

    #[test]
    fn fractional_core_count_is_rejected() {
        let raw = full_cpu().with("cores", "6.5");
        let err = validate(Category::Cpus, &raw).unwrap_err();
        assert_eq!(err.field(), "cores");
    }

    #[test]
    fn nan_price_is_rejected() {
        let raw = full_cpu().with("price", "NaN");
        let err = validate(Category::Cpus, &raw).unwrap_err();
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn optional_empty_fields_are_omitted() {
        let raw = full_cpu().with("image", "").with("description", "  ");
        let values = validate(Category::Cpus, &raw).unwrap();
        assert!(values.get("image").is_none());
        assert!(values.get("description").is_none());
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let raw = full_cpu().with("warranty", "3 years");
        let values = validate(Category::Cpus, &raw).unwrap();
        assert!(values.get("warranty").is_none());
    }

    #[test]
    fn optional_numeric_field_still_coerces() {
        let raw = RawRecord::new()
            .with("capacity", "2TB")
            .with("type", "HDD")
            .with("interface", "SATA III")
            .with("rpm", "7200")
            .with("name", "Barracuda")
            .with("brand", "Seagate")
            .with("price", "59.99");
        let values = validate(Category::Storage, &raw).unwrap();
        assert_eq!(values.get("rpm"), Some(&FieldValue::Int(7200)));
        assert_eq!(values.get("price"), Some(&FieldValue::Float(59.99)));
    }

    #[test]
    fn ram_kit_happy_path() {
        let raw = RawRecord::new()
            .with("name", "Kit A")
            .with("brand", "Corsair")
            .with("price", "80")
            .with("capacity", "16GB")
            .with("type", "DDR5")
            .with("speed", "6000MHz");
        let values = validate(Category::Ram, &raw).unwrap();
        assert_eq!(values.get("price"), Some(&FieldValue::Float(80.0)));
        assert_eq!(values.get("type"), Some(&FieldValue::Text("DDR5".into())));
        // cas_latency is optional and absent
        assert!(values.get("cas_latency").is_none());
    }
}
