use strum::IntoEnumIterator;
use tracing::debug;

use crate::chart::Difficulty;
use crate::config::history_columns as col;
use crate::error::{Error, Result};
use crate::parse::{parse_int, split_csv_line, strip_bom};
use crate::score::{ClearType, HistoryMap, ParsedScore};

/// Parse an e-amusement play history export.
///
/// Fails with `Error::Format` when the text is empty or the first header
/// field is not `バージョン`. Every data row yields one entry per SP
/// difficulty, including explicit NO PLAY entries.
pub fn parse_history(csv_text: &str) -> Result<HistoryMap> {
    let text = strip_bom(csv_text);
    if text.trim().is_empty() {
        return Err(Error::format("CSV is empty"));
    }

    let mut lines = text.lines();
    let header = lines.next().map(split_csv_line).unwrap_or_default();
    if header.first().map(String::as_str) != Some(col::HEADER_TOKEN) {
        return Err(Error::format(format!(
            "not an e-amusement export (header must start with \"{}\")",
            col::HEADER_TOKEN
        )));
    }

    let mut history = HistoryMap::new();
    let mut skipped = 0usize;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cols = split_csv_line(line);
        let Some(title) = cols.get(col::TITLE).filter(|t| !t.is_empty()) else {
            skipped += 1;
            continue;
        };

        let scores = Difficulty::iter()
            .map(|difficulty| parse_block(&cols, title, difficulty))
            .collect();
        history.insert(title.clone(), scores);
    }

    debug!(
        "Parsed {} history rows ({} rows without title skipped)",
        history.len(),
        skipped
    );
    Ok(history)
}

/// Extract one difficulty block of a data row
fn parse_block(cols: &[String], title: &str, difficulty: Difficulty) -> ParsedScore {
    let base = difficulty.history_offset();
    let cell = |field: usize| cols.get(base + field).map(String::as_str);
    let count = |field: usize| {
        cell(field)
            .and_then(parse_int)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0)
    };

    let level = count(col::LEVEL);
    let ex_score = count(col::SCORE);
    let clear_type = ClearType::from_export(cell(col::CLEAR_TYPE).unwrap_or(""));

    if level == 0 && ex_score == 0 && clear_type == ClearType::NoPlay {
        return ParsedScore::no_play(title, difficulty);
    }

    let miss_count = match cell(col::MISS_COUNT).unwrap_or(col::PLACEHOLDER) {
        col::PLACEHOLDER => None,
        raw => parse_int(raw).and_then(|v| u32::try_from(v).ok()),
    };

    let dj_level = cell(col::DJ_LEVEL)
        .filter(|v| !v.is_empty() && *v != col::PLACEHOLDER)
        .map(str::to_string);

    ParsedScore {
        title: title.to_string(),
        difficulty,
        ex_score,
        pgreat: count(col::PGREAT),
        great: count(col::GREAT),
        miss_count,
        clear_type,
        dj_level,
    }
}
