//! CLI output formatting and display helpers.

use signword_core::{CatalogEntry, CatalogVideo};

/// Returns terminal width from COLUMNS, or 80 if unset/invalid.
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 20)
        .unwrap_or(80)
}

/// Truncates text to at most `width` chars, appending ellipsis if truncated.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let text_len = text.chars().count();
    if text_len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    if width == 1 {
        return "…".to_string();
    }

    let mut output: String = text.chars().take(width - 1).collect();
    output.push('…');
    output
}

/// One listing row: id, word, level, meaning, video count.
pub fn render_entry_row(entry: &CatalogEntry, width: usize) -> String {
    let level = entry.level.as_deref().unwrap_or("-");
    let meaning = entry.meaning.as_deref().unwrap_or("-");
    let line = format!(
        "{} | {} | {} | {} | {} videos",
        entry.word_id,
        entry.word,
        level,
        meaning,
        entry.video_count()
    );
    truncate_to_width(&line, width)
}

/// Multi-line detail block for one entry and its videos.
///
/// Optional fields are printed only when present. URL lines are never
/// truncated so they stay copy-pastable.
pub fn render_entry_detail(entry: &CatalogEntry, width: usize) -> Vec<String> {
    let mut lines = vec![truncate_to_width(
        &format!("{} ({})", entry.word, entry.word_id),
        width,
    )];
    if let Some(word_type) = &entry.word_type {
        lines.push(truncate_to_width(&format!("  type: {word_type}"), width));
    }
    if let Some(meaning) = &entry.meaning {
        lines.push(truncate_to_width(&format!("  meaning: {meaning}"), width));
    }
    if let Some(level) = &entry.level {
        lines.push(truncate_to_width(&format!("  level: {level}"), width));
    }
    if !entry.tags.is_empty() {
        lines.push(truncate_to_width(
            &format!("  tags: {}", entry.tags.join(", ")),
            width,
        ));
    }
    if let Some(notes) = &entry.notes {
        lines.push(truncate_to_width(&format!("  notes: {notes}"), width));
    }
    push_video_section(&mut lines, "word videos", &entry.word_videos, width);
    push_video_section(&mut lines, "sentence videos", &entry.sentence_videos, width);
    lines
}

fn push_video_section(lines: &mut Vec<String>, label: &str, videos: &[CatalogVideo], width: usize) {
    if videos.is_empty() {
        return;
    }
    lines.push(truncate_to_width(
        &format!("  {label} ({}):", videos.len()),
        width,
    ));
    for video in videos {
        lines.push(truncate_to_width(&format!("    {}", video.id), width));
        if let Some(sentence) = &video.sentence_text {
            lines.push(truncate_to_width(&format!("      sentence: {sentence}"), width));
        }
        if !video.description.is_empty() {
            lines.push(truncate_to_width(
                &format!("      description: {}", video.description),
                width,
            ));
        }
        if !video.signer.is_empty() {
            lines.push(truncate_to_width(&format!("      signer: {}", video.signer), width));
        }
        lines.push(format!("      playback: {}", video.playback_url));
        lines.push(format!("      preview: {}", video.preview_url));
    }
}
