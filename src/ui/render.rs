use chrono::{DateTime, Utc};
use crossterm::style::{Color, StyledContent, Stylize};

use crate::{
    model::{mastery::ChampionMasteryEntry, region::Region, summoner::LookupResult},
    service::dictionary::{champion_name, profile_icon_url},
    ui::widget::{Message, MessageKind, WidgetState},
};

const PROGRESS_BAR_WIDTH: usize = 20;

pub type StyledLine = StyledContent<String>;

pub fn format_last_played(played: DateTime<Utc>) -> String {
    played.format("%Y-%m-%d").to_string()
}

pub fn format_points(points: u32) -> String {
    let digits = points.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent
    )
}

pub fn message_line(message: &Message) -> StyledLine {
    let (prefix, color) = match message.kind {
        MessageKind::Success => ("[+]", Color::Green),
        MessageKind::Warning => ("[!]", Color::Yellow),
        MessageKind::Error => ("[x]", Color::Red),
    };
    format!("{} {}", prefix, message.text).with(color)
}

pub fn summoner_lines(result: &LookupResult, region: Option<Region>) -> Vec<StyledLine> {
    let profile = &result.summoner;

    let mut lines = vec![
        "Summoner Info".to_string().with(Color::Magenta).bold(),
        format!("  {}", profile.display_name).with(Color::White).bold(),
        format!("  Level:  {}", profile.level).stylize(),
    ];
    if let Some(region) = region {
        lines.push(format!("  Region: {}", region.label()).stylize());
    }
    if let Some(icon) = profile.profile_icon_id {
        lines.push(format!("  Icon:   {}", profile_icon_url(icon)).with(Color::DarkGrey));
    }

    if result.top_champions.is_empty() {
        lines.push("  No champion mastery data available".to_string().with(Color::DarkGrey));
        return lines;
    }

    lines.push(String::new().stylize());
    lines.push("Top Champions".to_string().with(Color::Magenta).bold());
    for (rank, champion) in result.top_champions.iter().enumerate() {
        lines.extend(champion_lines(rank + 1, champion));
    }
    lines
}

pub fn champion_lines(rank: usize, champion: &ChampionMasteryEntry) -> Vec<StyledLine> {
    let mut lines = vec![
        format!("  #{} {}", rank, champion_name(champion.champion_id)).with(Color::Cyan).bold(),
        format!(
            "     Mastery {} | {} pts | {} tokens",
            champion.mastery_level,
            format_points(champion.mastery_points),
            champion.tokens_earned
        )
        .stylize(),
    ];

    if let Some(played) = champion.last_played() {
        lines.push(format!("     Last played {}", format_last_played(played)).with(Color::DarkGrey));
    }

    if let (Some(percent), Some(needed)) = (champion.progress_percent(), champion.points_needed()) {
        lines.push(
            format!(
                "     Level {}: {} ({} points needed)",
                champion.next_level(),
                progress_bar(percent, PROGRESS_BAR_WIDTH),
                format_points(needed)
            )
            .with(Color::Blue),
        );
    }
    lines
}

pub fn state_lines(state: &WidgetState) -> Vec<StyledLine> {
    let mut lines = Vec::new();
    if state.loading {
        lines.push("Looking up...".to_string().with(Color::DarkGrey));
        return lines;
    }
    if let Some(message) = &state.message {
        lines.push(message_line(message));
    }
    if let Some(result) = &state.result {
        lines.push(String::new().stylize());
        lines.extend(summoner_lines(result, state.region));
    }
    lines
}
