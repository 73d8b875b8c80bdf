use std::io;

use serde_json::Value;

use super::format::{self, Align, Column, number_field, text_field};

pub fn render_classify(data: &Value) -> io::Result<String> {
    let sub_scores = data
        .get("sub_scores")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("classify output requires sub_scores"))?;

    let mut lines = vec![
        format!(
            "{} (grade {})",
            text_field(data, "tier_badge"),
            text_field(data, "grade")
        ),
        String::new(),
    ];

    if let Some(investment) = data.get("investment").filter(|value| value.is_object()) {
        lines.push("Investment:".to_string());
        lines.extend(format::key_value_rows(
            &[
                ("Name:", text_field(investment, "name").to_string()),
                ("Id:", text_field(investment, "id").to_string()),
                (
                    "Asset class:",
                    text_field(investment, "asset_class").replace('_', " "),
                ),
                (
                    "Minimum:",
                    format::currency(number_field(investment, "minimum_investment")),
                ),
            ],
            2,
        ));
        lines.push(String::new());
    }

    lines.push("Scores:".to_string());
    let columns = [
        Column {
            name: "Component",
            align: Align::Left,
        },
        Column {
            name: "Score",
            align: Align::Right,
        },
        Column {
            name: "Grade",
            align: Align::Left,
        },
    ];
    let mut rows = sub_scores
        .iter()
        .map(|row| {
            vec![
                capitalize(text_field(row, "name")),
                format::score(number_field(row, "score")),
                text_field(row, "grade").to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    rows.push(vec![
        "Final".to_string(),
        format::score(number_field(data, "final")),
        text_field(data, "grade").to_string(),
    ]);
    lines.extend(format::render_table_or_blocks(
        &columns,
        &rows,
        format::terminal_width(),
        "Component",
    ));

    let strengths = string_list(data, "strengths");
    if !strengths.is_empty() {
        lines.push(String::new());
        lines.push("Strengths:".to_string());
        lines.extend(strengths.iter().map(|strength| format!("  - {strength}")));
    }

    let recommendations = string_list(data, "recommendations");
    if !recommendations.is_empty() {
        lines.push(String::new());
        lines.push("Recommendations:".to_string());
        lines.extend(
            recommendations
                .iter()
                .enumerate()
                .map(|(index, line)| format!("  {}. {line}", index + 1)),
        );
    }

    lines.push(String::new());
    lines.push(source_line(data));
    Ok(lines.join("\n"))
}

pub(super) fn source_line(data: &Value) -> String {
    let source = text_field(data, "source").replace('_', " ");
    match data.get("source_ref").and_then(Value::as_str) {
        Some(reference) => format!("Source: {source} ({reference})"),
        None => format!("Source: {source}"),
    }
}

fn string_list(data: &Value, key: &str) -> Vec<String> {
    data.get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
