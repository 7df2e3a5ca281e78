use crate::utils::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Tsv,
}

pub fn render_record<T: Serialize, W: Write>(record: &T, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, record)?;
    writeln!(writer)?;
    Ok(())
}

/// 以 JSON、CSV 或 TSV 輸出清單。表格欄位為所有紀錄頂層欄位的聯集，
/// 巢狀物件以 JSON 文字放進儲存格
pub fn render_records<T: Serialize, W: Write>(
    records: &[T],
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    let delimiter = match format {
        OutputFormat::Json => return render_record(&records, writer),
        OutputFormat::Csv => b',',
        OutputFormat::Tsv => b'\t',
    };

    let rows: Vec<Map<String, Value>> = records
        .iter()
        .map(|record| match serde_json::to_value(record) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                Ok(map)
            }
            Err(e) => Err(e),
        })
        .collect::<std::result::Result<_, _>>()?;

    let mut columns: Vec<String> = Vec::new();
    for row in &rows {
        for key in row.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let mut table = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    if !columns.is_empty() {
        table.write_record(&columns)?;
    }
    for row in &rows {
        table.write_record(columns.iter().map(|column| cell(row.get(column))))?;
    }
    table.flush()?;
    Ok(())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{District, DivisionRef};

    fn districts() -> Vec<District> {
        vec![
            District {
                district_id: Some(1),
                district_name: "North".to_string(),
                division: DivisionRef {
                    division_id: 3,
                    division_name: None,
                },
            },
            District {
                district_id: None,
                district_name: "South, East".to_string(),
                division: DivisionRef::default(),
            },
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        render_records(&districts(), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_csv_columns_are_union_of_fields() {
        let text = render(OutputFormat::Csv);
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("districtId"));
        assert!(header.contains("districtName"));
        assert!(header.contains("division"));
        assert_eq!(lines.count(), 2);
        assert!(text.contains("\"South, East\""));
    }

    #[test]
    fn test_tsv_uses_tabs() {
        let text = render(OutputFormat::Tsv);
        assert!(text.lines().next().unwrap().contains('\t'));
    }

    #[test]
    fn test_json_is_array() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_list_renders_nothing_for_tables() {
        let mut out = Vec::new();
        render_records::<District, _>(&[], OutputFormat::Csv, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
