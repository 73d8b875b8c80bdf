use std::io;

use serde_json::Value;

use super::classify_text::source_line;
use super::format::{self, Align, Column, number_field, text_field};

pub fn render_impact(data: &Value) -> io::Result<String> {
    let principles = data
        .get("principles")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("impact output requires principles"))?;

    let mut lines = vec![
        format!(
            "Kingdom impact: {}/100 ({} alignment)",
            number_field(data, "kingdom_score"),
            text_field(data, "overall_alignment")
        ),
        String::new(),
    ];
    lines.extend(format::key_value_rows(
        &[
            (
                "Recommendation:",
                text_field(data, "recommendation_text").to_string(),
            ),
            (
                "Projected IRR:",
                format::percent(number_field(data, "projected_irr")),
            ),
        ],
        2,
    ));

    lines.push(String::new());
    lines.push("Principles:".to_string());
    let columns = [
        Column {
            name: "Principle",
            align: Align::Left,
        },
        Column {
            name: "Score",
            align: Align::Right,
        },
        Column {
            name: "Weight",
            align: Align::Right,
        },
        Column {
            name: "Alignment",
            align: Align::Left,
        },
        Column {
            name: "Scripture",
            align: Align::Left,
        },
    ];
    let rows = principles
        .iter()
        .map(|row| {
            vec![
                text_field(row, "label").to_string(),
                format::score(number_field(row, "score")),
                format!("{:.0}%", number_field(row, "weight") * 100.0),
                text_field(row, "alignment").to_string(),
                text_field(row, "scripture").to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    lines.extend(format::render_table_or_blocks(
        &columns,
        &rows,
        format::terminal_width(),
        "Principle",
    ));

    lines.push(String::new());
    lines.push(source_line(data));
    Ok(lines.join("\n"))
}
