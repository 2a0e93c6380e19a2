//! # Rendering
//!
//! Turns command results into terminal text. Layout math (width, truncation,
//! padding) is Unicode-aware; colors come from `colored`, which honors
//! `NO_COLOR` and non-terminal output on its own.

use chrono::{DateTime, Duration, Local, Utc};
use colored::Colorize;
use flashdeck::api::{CmdMessage, MessageLevel};
use flashdeck::config::FlashConfig;
use flashdeck::index::{DisplayCard, DisplayDeck};
use flashdeck::model::{Deck, DeckStats};
use flashdeck::study::SessionSummary;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 16;
pub const COUNT_WIDTH: usize = 10;
pub const RATE_WIDTH: usize = 8;
const LEFT_PAD: &str = "    ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_deck_list(decks: &[DisplayDeck]) -> String {
    if decks.is_empty() {
        return "No decks found.\n".to_string();
    }

    let mut out = String::new();
    for dd in decks {
        let idx = format!("{}. ", dd.index);
        let count = format!("{:>width$}", card_count(dd.deck.cards.len()), width = COUNT_WIDTH);
        let stats = dd.deck.stats();
        let rate = match stats.total_answers() {
            0 => " ".repeat(RATE_WIDTH),
            _ => format!("{:>width$}", format_rate(stats.success_rate), width = RATE_WIDTH),
        };
        let studied = match dd.deck.last_studied {
            Some(at) => format_time_ago(at),
            None => format!("{:>width$}", "never studied", width = TIME_WIDTH),
        };

        let fixed = LEFT_PAD.width() + idx.width() + COUNT_WIDTH + RATE_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);

        let name = truncate_to_width(&dd.deck.name, available);
        let mut used = name.width();
        let mut description = String::new();
        let room = available.saturating_sub(used + 2);
        if !dd.deck.description.is_empty() && room > 1 {
            let text = truncate_to_width(&dd.deck.description, room);
            used += text.width() + 2;
            description = format!("  {}", text.dimmed());
        }
        let padding = " ".repeat(available.saturating_sub(used));

        out.push_str(&format!(
            "{}{}{}{}{}{}{}{}\n",
            LEFT_PAD,
            idx.yellow(),
            name.bold(),
            description,
            padding,
            count,
            rate.green(),
            studied.dimmed()
        ));
    }
    out
}

pub(super) fn render_deck_header(deck: &Deck) -> String {
    let mut out = format!("{}\n", deck.name.bold());
    if !deck.description.is_empty() {
        out.push_str(&format!("{}\n", deck.description));
    }
    let studied = deck
        .last_studied
        .map(format_local)
        .unwrap_or_else(|| "never".to_string());
    out.push_str(&format!(
        "{}\n",
        format!(
            "{} · created {} · last studied {}",
            card_count(deck.cards.len()),
            format_local(deck.created_at),
            studied
        )
        .dimmed()
    ));
    out
}

pub(super) fn render_card_list(cards: &[DisplayCard]) -> String {
    if cards.is_empty() {
        return "No cards in this deck.\n".to_string();
    }

    let mut out = String::new();
    for dc in cards {
        let idx = format!("{}. ", dc.index);
        let score = format!(
            "{:>width$}",
            format!("{}/{}", dc.card.correct_count, dc.card.total_answers()),
            width = COUNT_WIDTH
        );
        let media = match dc.card.media.len() {
            0 => String::new(),
            n => format!(" [{} media]", n),
        };

        let fixed = LEFT_PAD.width() + idx.width() + " → ".width() + media.width() + COUNT_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let front = truncate_to_width(&dc.card.front, available / 2);
        let back = truncate_to_width(&dc.card.back, available - front.width());
        let padding = " ".repeat(available.saturating_sub(front.width() + back.width()));

        out.push_str(&format!(
            "{}{}{} → {}{}{}{}\n",
            LEFT_PAD,
            idx.yellow(),
            front,
            back.dimmed(),
            media.cyan(),
            padding,
            score
        ));
    }
    out
}

pub(super) fn render_stats(stats: &DeckStats) -> String {
    format!(
        "Cards:        {}\nAnswers:      {} ({} correct, {} incorrect)\nSuccess rate: {}\n",
        stats.total_cards,
        stats.total_answers(),
        stats.correct_answers.to_string().green(),
        stats.incorrect_answers.to_string().red(),
        format_rate(stats.success_rate).bold()
    )
}

/// Per-card lines: position, front and either `correct/total (rate)` or
/// "not studied".
pub(super) fn render_card_stats(cards: &[DisplayCard]) -> String {
    let mut out = String::new();
    for dc in cards {
        let stats = dc.card.stats();
        let score = match stats.success_rate {
            Some(rate) => format!("{}/{} ({})", stats.correct, stats.total, format_rate(rate)),
            None => "not studied".to_string(),
        };
        let idx = format!("{}. ", dc.index);
        let available = LINE_WIDTH.saturating_sub(LEFT_PAD.width() + idx.width() + score.width() + 1);
        let front = truncate_to_width(&dc.card.front, available);
        let padding = " ".repeat(available.saturating_sub(front.width()) + 1);
        out.push_str(&format!(
            "{}{}{}{}{}\n",
            LEFT_PAD,
            idx.yellow(),
            front,
            padding,
            score.dimmed()
        ));
    }
    out
}

pub(super) fn render_summary(summary: &SessionSummary) -> String {
    format!(
        "Time:         {}\nCards:        {}/{}\nCorrect:      {}/{}\nSuccess rate: {}\n",
        format_elapsed(summary.elapsed),
        summary.answered,
        summary.cards_in_session,
        summary.correct,
        summary.answered,
        format_rate(summary.success_rate).bold()
    )
}

pub(super) fn render_config(config: &FlashConfig) -> String {
    let mut out = String::new();
    for key in FlashConfig::keys() {
        if let Ok(value) = config.get(key) {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out
}

fn card_count(n: usize) -> String {
    if n == 1 {
        "1 card".to_string()
    } else {
        format!("{} cards", n)
    }
}

fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}

fn format_local(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

/// `mm:ss`, minutes are not capped at 60.
fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.num_seconds().max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
