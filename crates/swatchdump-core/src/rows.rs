//! Tabular row schema for exported records.
//!
//! All models share one column set; columns a model does not have hold
//! [`NOT_APPLICABLE`].

use serde::{Deserialize, Serialize};

use crate::{ColorRecord, ColorValue};

/// Placeholder for columns that do not apply to a record's model.
pub const NOT_APPLICABLE: &str = "N/A";

/// Column names, in [`ColorRow`] field order.
pub const COLUMNS: [&str; 8] = ["Name", "Model", "C1", "C2", "C3", "C4", "Hex", "RVB"];

/// One exported row.
///
/// # Examples
/// ```
/// use swatchdump_core::{ColorRecord, ColorRow, ColorValue, SourceFormat};
///
/// let record = ColorRecord {
///     name: Some("Gr".to_string()),
///     source_format: SourceFormat::Aco,
///     color: ColorValue::Rgb { r: 255, g: 0, b: 128 },
/// };
/// let row = ColorRow::from_record(&record);
/// assert_eq!(row.hex, "#FF0080");
/// assert_eq!(row.c4, "N/A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "C1")]
    pub c1: String,
    #[serde(rename = "C2")]
    pub c2: String,
    #[serde(rename = "C3")]
    pub c3: String,
    #[serde(rename = "C4")]
    pub c4: String,
    #[serde(rename = "Hex")]
    pub hex: String,
    #[serde(rename = "RVB")]
    pub rvb: String,
}

impl ColorRow {
    pub fn from_record(record: &ColorRecord) -> Self {
        let na = || NOT_APPLICABLE.to_string();
        let [c1, c2, c3, c4] = match &record.color {
            ColorValue::Rgb { r, g, b } => [r.to_string(), g.to_string(), b.to_string(), na()],
            ColorValue::Cmyk { c, m, y, k } => [tenth(*c), tenth(*m), tenth(*y), tenth(*k)],
            ColorValue::Lab { l, a, b } => [tenth(*l), tenth(*a), tenth(*b), na()],
        };
        ColorRow {
            name: record.name.clone().unwrap_or_default(),
            model: record.color.model().to_string(),
            c1,
            c2,
            c3,
            c4,
            hex: record.color.hex().unwrap_or_else(na),
            rvb: record.color.rvb().unwrap_or_else(na),
        }
    }
}

fn tenth(value: f64) -> String {
    format!("{value:.1}")
}

/// Rows in record order.
pub fn to_rows(records: &[ColorRecord]) -> Vec<ColorRow> {
    records.iter().map(ColorRow::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::{COLUMNS, ColorRow, NOT_APPLICABLE, to_rows};
    use crate::{ColorRecord, ColorValue, SourceFormat};

    #[test]
    fn columns_match_serialized_field_names() {
        let record = ColorRecord {
            name: None,
            source_format: SourceFormat::Aco,
            color: ColorValue::Rgb { r: 0, g: 0, b: 0 },
        };
        let value = serde_json::to_value(ColorRow::from_record(&record)).expect("row json");
        let keys: Vec<&str> = value
            .as_object()
            .expect("row object")
            .keys()
            .map(String::as_str)
            .collect();
        let mut expected = COLUMNS.to_vec();
        let mut actual = keys;
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn cmyk_row_has_no_display_forms() {
        let record = ColorRecord {
            name: Some("Ink".to_string()),
            source_format: SourceFormat::Ase,
            color: ColorValue::Cmyk {
                c: 12.3,
                m: 0.0,
                y: 100.0,
                k: 5.5,
            },
        };
        let row = ColorRow::from_record(&record);
        assert_eq!(row.model, "CMYK");
        assert_eq!([row.c1.as_str(), row.c2.as_str()], ["12.3", "0.0"]);
        assert_eq!(row.c4, "5.5");
        assert_eq!(row.hex, NOT_APPLICABLE);
        assert_eq!(row.rvb, NOT_APPLICABLE);
    }

    #[test]
    fn lab_row_keeps_sign() {
        let record = ColorRecord {
            name: None,
            source_format: SourceFormat::Ase,
            color: ColorValue::Lab {
                l: 75.0,
                a: -20.5,
                b: 3.0,
            },
        };
        let rows = to_rows(&[record]);
        assert_eq!(rows[0].name, "");
        assert_eq!(rows[0].c2, "-20.5");
        assert_eq!(rows[0].c4, NOT_APPLICABLE);
    }

    #[test]
    fn rgb_row_has_rvb() {
        let record = ColorRecord {
            name: None,
            source_format: SourceFormat::Ase,
            color: ColorValue::Rgb { r: 7, g: 80, b: 255 },
        };
        let row = ColorRow::from_record(&record);
        assert_eq!(row.rvb, "007-080-255");
        assert_eq!(row.c1, "7");
    }
}
