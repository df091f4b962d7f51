use chrono::{DateTime, Utc};
use colored::Colorize;
use edughana::api::{AssessmentView, CmdMessage, MessageLevel, ResourceView};
use edughana::model::{Difficulty, EducationalLevel, NewsItem, Priority, ResourceKind, Subject};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::styles;

const LINE_WIDTH: usize = 100;
const META_WIDTH: usize = 26;
const KIND_WIDTH: usize = 14;
const TIME_WIDTH: usize = 16;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_levels(levels: &[EducationalLevel]) {
    if levels.is_empty() {
        println!("No educational levels available.");
        return;
    }

    for level in levels {
        println!(
            "{:>3}. {} {}",
            level.id,
            styles::HEADING.apply_to(&level.name),
            styles::SLUG.apply_to(format!("({})", level.slug)),
        );
        if !level.description.is_empty() {
            println!("     {}", level.description.dimmed());
        }
    }
}

pub(crate) fn print_subjects(subjects: &[Subject]) {
    if subjects.is_empty() {
        println!("No subjects available.");
        return;
    }

    for subject in subjects {
        println!("{:>3}. {}", subject.id, subject.name);
    }
}

pub(crate) fn print_resources(views: &[ResourceView]) {
    if views.is_empty() {
        println!("No resources found matching your criteria.");
        return;
    }

    for view in views {
        let resource = &view.resource;
        let idx_str = format!("{:>3}. ", resource.id);

        let title_content = if resource.description.is_empty() {
            resource.title.clone()
        } else {
            let preview: String = resource
                .description
                .chars()
                .take(50)
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();
            format!("{} {}", resource.title, preview)
        };

        let fixed = idx_str.width() + META_WIDTH + KIND_WIDTH + 4;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        let meta = format!("{} - {}", view.subject, view.level);
        let marker = if resource.is_downloadable { "⇩" } else { " " };

        println!(
            "{}{}{}  {} {} {}",
            idx_str,
            title_display,
            " ".repeat(padding),
            pad(&meta, META_WIDTH).dimmed(),
            resource_kind_badge(resource.kind),
            marker.green(),
        );
    }
}

pub(crate) fn print_assessments(views: &[AssessmentView]) {
    if views.is_empty() {
        println!("No assessments found matching your criteria.");
        return;
    }

    for view in views {
        let assessment = &view.assessment;
        let idx_str = format!("{:>3}. ", assessment.id);

        let fixed = idx_str.width() + META_WIDTH + KIND_WIDTH + 10 + 4;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title_display = truncate_to_width(&assessment.title, available);
        let padding = available.saturating_sub(title_display.width());

        let meta = format!("{} - {}", view.subject, view.level);
        let extent = match (assessment.duration_minutes, assessment.num_questions) {
            (Some(minutes), Some(questions)) => format!("{}min {}q", minutes, questions),
            (Some(minutes), None) => format!("{}min", minutes),
            (None, Some(questions)) => format!("{}q", questions),
            (None, None) => String::new(),
        };

        println!(
            "{}{}{}  {} {} {} {}",
            idx_str,
            title_display,
            " ".repeat(padding),
            pad(&meta, META_WIDTH).dimmed(),
            pad(&assessment.kind.to_string(), KIND_WIDTH).cyan(),
            difficulty_badge(assessment.difficulty),
            extent.dimmed(),
        );
    }
}

pub(crate) fn print_news(items: &[NewsItem]) {
    if items.is_empty() {
        println!("No news found matching your criteria.");
        return;
    }

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            println!();
        }

        let badge = priority_badge(item);
        let featured = if item.is_featured { "★ " } else { "" };
        let time_ago = format_time_ago(item.created_at);

        let fixed = badge_width(item) + featured.width() + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title_display = truncate_to_width(&item.title, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{} {}{}{} {}",
            badge,
            featured.yellow(),
            title_display.bold(),
            " ".repeat(padding),
            time_ago.dimmed(),
        );
        println!("  {}", format!("{} • {}", item.category, item.source).dimmed());
        if !item.content.is_empty() {
            println!("  {}", truncate_to_width(&item.content, LINE_WIDTH - 2));
        }
        if let Some(url) = &item.external_url {
            println!("  {}", url.underline().dimmed());
        }
    }
}

fn resource_kind_badge(kind: ResourceKind) -> colored::ColoredString {
    let label = pad(&kind.to_string(), KIND_WIDTH);
    match kind {
        ResourceKind::LessonNote => label.blue(),
        ResourceKind::PastQuestion => label.purple(),
        ResourceKind::Textbook => label.green(),
        ResourceKind::Curriculum => label.yellow(),
    }
}

fn difficulty_badge(difficulty: Difficulty) -> colored::ColoredString {
    let label = format!("[{}]", difficulty);
    let label = pad(&label, 8);
    match difficulty {
        Difficulty::Easy => label.green(),
        Difficulty::Medium => label.yellow(),
        Difficulty::Hard => label.red(),
    }
}

fn priority_badge(item: &NewsItem) -> colored::ColoredString {
    let label = format!("[{}]", item.priority);
    match item.priority {
        Priority::High => label.red(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.green(),
    }
}

fn badge_width(item: &NewsItem) -> usize {
    format!("[{}]", item.priority).width()
}

fn pad(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
