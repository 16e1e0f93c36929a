/// Interleaves parallel columns round-robin: `[a, b], [x, y]` becomes
/// `[a, x, b, y]`.
///
/// # Panics
///
/// Panics when the columns differ in length. Callers must pass equally sized
/// columns; a mismatch is a programming error, not a dialog outcome.
pub fn splice_columns(columns: &[&[String]]) -> Vec<String> {
    let Some(first) = columns.first() else {
        return Vec::new();
    };
    let rows = first.len();
    assert!(
        columns.iter().all(|column| column.len() == rows),
        "all list columns must be the same length (got {:?})",
        columns.iter().map(|column| column.len()).collect::<Vec<_>>()
    );
    let mut out = Vec::with_capacity(rows * columns.len());
    for row in 0..rows {
        for column in columns {
            out.push(column[row].clone());
        }
    }
    out
}

pub fn status_token(selected: bool) -> &'static str {
    if selected {
        "ON"
    } else {
        "OFF"
    }
}

/// Splits checklist output such as `"web" "db"` into its tags.
pub fn split_selection(raw: &str) -> Vec<String> {
    match shell_words::split(raw) {
        Ok(tags) => tags.into_iter().filter(|tag| !tag.is_empty()).collect(),
        Err(error) => {
            log::warn!("unbalanced quotes in selection output ({error}); splitting on whitespace");
            raw.split_whitespace()
                .map(|tag| tag.trim_matches('"').to_string())
                .filter(|tag| !tag.is_empty())
                .collect()
        }
    }
}
