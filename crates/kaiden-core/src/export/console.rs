//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::aggregate::{ScoreResult, ScoreSummary};
use crate::chart::Difficulty;
use crate::score::{ClearType, DjLevel, format_bpi, format_score_rate};

/// Format one chart result as a single colored line:
/// "SPA Lv.12 冥  1800/2000 90.00% AAA HARD  BPI 12.50"
pub fn format_result_console(result: &ScoreResult) -> String {
    format!(
        "{} Lv.{:<2} {}  {}/{} {} {} {}  BPI {}",
        format_colored_difficulty(&result.difficulty),
        result.level,
        result.title.bold(),
        result.ex_score,
        result.max_score,
        format_score_rate(result.score_rate),
        format_colored_dj_level(&result.dj_level),
        format_colored_clear_type(&result.clear_type),
        format_bpi(result.bpi),
    )
}

/// Format the summary with its per-level table
pub fn format_summary_console(summary: &ScoreSummary) -> String {
    let mut output = String::new();
    let border = "━".repeat(72);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  PLAYED  : {}/{}",
        summary.played_charts, summary.total_charts
    );
    let _ = writeln!(
        output,
        "  RATE    : {}",
        format_score_rate(summary.average_score_rate)
    );
    let _ = writeln!(
        output,
        "  EX      : {}/{}",
        summary.total_ex_score, summary.total_max_score
    );
    let _ = writeln!(output, "  BPI     : {}", format_bpi(summary.average_bpi));
    let _ = writeln!(
        output,
        "  ABILITY : single {:.2} / jikara {:.2}",
        summary.ability.single_note, summary.ability.jikara
    );
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(
        output,
        "  {:>4} {:>9} {:>8} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4} {:>4}",
        "Lv", "played", "rate", "99%", "98%", "97%", "96%", "95%", "MAX-", "AAA", "AA", "A"
    );
    for stats in &summary.level_stats {
        let played = format!("{}/{}", stats.played, stats.total);
        let mut line = format!(
            "  {:>4} {:>9} {:>8}",
            stats.level,
            played,
            format_score_rate(stats.average_rate)
        );
        for count in stats.rate_buckets() {
            let _ = write!(line, " {:>4}", count);
        }
        let _ = writeln!(output, "{}", line);
    }
    let _ = write!(output, "{}", border_dim);

    output
}

fn format_colored_difficulty(difficulty: &Difficulty) -> String {
    let name = difficulty.short_name();
    match difficulty {
        Difficulty::SpB => name.green().to_string(),
        Difficulty::SpN => name.blue().to_string(),
        Difficulty::SpH => name.yellow().to_string(),
        Difficulty::SpA => name.red().to_string(),
        Difficulty::SpL => name.purple().to_string(),
    }
}

fn format_colored_clear_type(clear_type: &ClearType) -> String {
    let name = clear_type.short_name();
    match clear_type {
        ClearType::NoPlay => name.dimmed().to_string(),
        ClearType::Failed => name.red().to_string(),
        ClearType::AssistClear => name.purple().to_string(),
        ClearType::EasyClear => name.green().to_string(),
        ClearType::Clear => name.cyan().to_string(),
        ClearType::HardClear => name.bold().to_string(),
        ClearType::ExHardClear => name.yellow().to_string(),
        ClearType::FullCombo => name.cyan().bold().to_string(),
    }
}

fn format_colored_dj_level(dj_level: &DjLevel) -> String {
    let name = dj_level.short_name();
    match dj_level {
        // F～B: blue to pale cyan
        DjLevel::F => name.truecolor(0, 0, 255).to_string(),
        DjLevel::E => name.truecolor(50, 100, 255).to_string(),
        DjLevel::D => name.truecolor(110, 170, 255).to_string(),
        DjLevel::C => name.truecolor(170, 215, 255).to_string(),
        DjLevel::B => name.truecolor(220, 245, 255).to_string(),
        DjLevel::A => name.truecolor(0, 255, 255).to_string(),
        // silver
        DjLevel::Aa => name.truecolor(192, 192, 192).to_string(),
        // gold
        DjLevel::Aaa => name.truecolor(255, 200, 0).bold().to_string(),
    }
}
