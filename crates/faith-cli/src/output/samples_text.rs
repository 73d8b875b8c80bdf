use std::io;

use serde_json::Value;

use super::format::{self, Align, Column, number_field, text_field};

pub fn render_samples(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("samples output requires rows"))?;

    let mut lines = vec![
        format!("Bundled sample investments ({})", rows.len()),
        String::new(),
    ];
    let columns = [
        Column {
            name: "Id",
            align: Align::Left,
        },
        Column {
            name: "Name",
            align: Align::Left,
        },
        Column {
            name: "Class",
            align: Align::Left,
        },
        Column {
            name: "Minimum",
            align: Align::Right,
        },
        Column {
            name: "Final",
            align: Align::Right,
        },
        Column {
            name: "Tier",
            align: Align::Left,
        },
        Column {
            name: "Grade",
            align: Align::Left,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                text_field(row, "id").to_string(),
                text_field(row, "name").to_string(),
                text_field(row, "asset_class").replace('_', " "),
                format::currency(number_field(row, "minimum_investment")),
                format::score(number_field(row, "final")),
                format!(
                    "{} {}",
                    text_field(row, "tier"),
                    text_field(row, "tier_label")
                ),
                text_field(row, "grade").to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table_or_blocks(
        &columns,
        &table_rows,
        format::terminal_width(),
        "Sample",
    ));

    lines.push(String::new());
    lines.push("Run `faith classify --sample <id>` for the full breakdown.".to_string());
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_samples;

    #[test]
    fn renders_one_row_per_sample() {
        let data = json!({
            "rows": [
                {
                    "id": "faith-reit-1",
                    "name": "Kingdom Community REIT",
                    "asset_class": "real_estate",
                    "minimum_investment": 50000.0,
                    "final": 88.7,
                    "tier": "1",
                    "tier_label": "Premier",
                    "grade": "A"
                }
            ]
        });

        let rendered = render_samples(&data);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Bundled sample investments (1)"));
            assert!(text.contains("faith-reit-1"));
            assert!(text.contains("real estate"));
            assert!(text.contains("1 Premier"));
            assert!(text.contains("faith classify --sample <id>"));
        }
    }
}
