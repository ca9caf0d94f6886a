//! # Rendering
//!
//! Turns command results into terminal text. Every `render_*` function
//! returns a `String` so output can be tested without a terminal; the
//! `print_*` wrappers write it to stdout.
//!
//! Layout (column widths, truncation, padding) is computed on plain text with
//! `unicode-width` and styling is applied afterwards, so ANSI codes never
//! disturb alignment.

use super::setup::OutputFormat;
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use perfdash::api::{CmdMessage, CmdResult, ListedEmployee, MessageLevel};
use perfdash::commands::analytics::Analytics;
use perfdash::commands::stats::SummaryStats;
use perfdash::config::DashConfig;
use perfdash::error::Result;
use perfdash::model::{Department, EmployeeDetail, Rating};
use perfdash::store::Bookmark;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const BOOKMARK_MARKER: &str = "★";
const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 24;
const DEPT_WIDTH: usize = 12;
const RATING_WIDTH: usize = 6;
const EMAIL_WIDTH: usize = 32;
const BAR_WIDTH: usize = 30;
const TIME_WIDTH: usize = 16;

pub fn print_result(
    result: &CmdResult,
    format: OutputFormat,
    body: impl FnOnce() -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render_json(result)?),
        OutputFormat::Text => {
            print!("{}", body());
            print_messages(&result.messages);
        }
    }
    Ok(())
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

pub fn render_json(result: &CmdResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

/// Five-star rendering, filled then hollow.
pub fn stars(rating: Rating) -> String {
    let filled = usize::from(rating.value());
    let empty = usize::from(Rating::MAX) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

fn department_color(department: Department, text: &str) -> ColoredString {
    match department {
        Department::Engineering => text.blue(),
        Department::Marketing => text.magenta(),
        Department::Sales => text.green(),
        Department::Hr => text.yellow(),
        Department::Finance => text.cyan(),
    }
}

pub fn render_employee_list(rows: &[ListedEmployee]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "  {} {} {} {} {}\n",
        pad_to_width("ID", ID_WIDTH).bold(),
        pad_to_width("Name", NAME_WIDTH).bold(),
        pad_to_width("Department", DEPT_WIDTH).bold(),
        pad_to_width("Rating", RATING_WIDTH).bold(),
        "Email".bold()
    ));

    for row in rows {
        let e = &row.employee;
        let marker = if row.bookmarked {
            BOOKMARK_MARKER.yellow()
        } else {
            " ".normal()
        };
        let rating = pad_to_width(&stars(e.rating), RATING_WIDTH);
        let rating = if e.is_top_performer() {
            rating.yellow()
        } else {
            rating.normal()
        };

        out.push_str(&format!(
            "{} {} {} {} {} {}\n",
            marker,
            pad_to_width(&e.id.to_string(), ID_WIDTH).dimmed(),
            pad_to_width(&e.full_name(), NAME_WIDTH),
            department_color(e.department, &pad_to_width(e.department.name(), DEPT_WIDTH)),
            rating,
            truncate_to_width(&e.email, EMAIL_WIDTH).dimmed()
        ));
    }
    out
}

/// The bookmarks view, with when each bookmark was added.
pub fn render_bookmarks(rows: &[ListedEmployee], entries: &[Bookmark]) -> String {
    let mut out = String::new();
    for row in rows {
        let e = &row.employee;
        let added = entries
            .iter()
            .find(|b| b.id == e.id)
            .map(|b| format_time_ago(b.added_at))
            .unwrap_or_default();
        out.push_str(&format!(
            "{} {} {} {} {}\n",
            BOOKMARK_MARKER.yellow(),
            pad_to_width(&e.id.to_string(), ID_WIDTH).dimmed(),
            pad_to_width(&e.full_name(), NAME_WIDTH),
            department_color(e.department, &pad_to_width(e.department.name(), DEPT_WIDTH)),
            format!("{:>width$}", added, width = TIME_WIDTH).dimmed()
        ));
    }
    out
}

pub fn render_summary(summary: &SummaryStats) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Team Overview".bold()));
    out.push_str(&format!("  Total employees    {}\n", summary.total));
    out.push_str(&format!("  Average rating     {:.1}\n", summary.avg_rating));
    out.push_str(&format!(
        "  Top performers     {}\n",
        summary.top_performer_count
    ));
    out.push_str(&format!("  Departments        {}\n", summary.department_count));
    out
}

pub fn render_analytics(analytics: &Analytics) -> String {
    let mut out = render_summary(&analytics.summary);
    out.push_str(&format!(
        "  Performance rate   {}%\n",
        analytics.performance_rate
    ));

    out.push('\n');
    out.push_str(&format!("{}\n", "Department Performance".bold()));
    if analytics.departments.is_empty() {
        out.push_str(&format!("  {}\n", "No departments.".dimmed()));
    }
    for dept in &analytics.departments {
        out.push_str(&format!(
            "  {} avg {:.1}  {:>3} employees  {:>3} top performers\n",
            department_color(
                dept.department,
                &pad_to_width(dept.department.name(), DEPT_WIDTH)
            ),
            dept.avg_rating,
            dept.employee_count,
            dept.top_performer_count
        ));
    }

    out.push('\n');
    out.push_str(&format!("{}\n", "Rating Distribution".bold()));
    let max = analytics
        .ratings
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);
    for bucket in &analytics.ratings {
        let bar_len = if max == 0 {
            0
        } else {
            (bucket.count * BAR_WIDTH).div_ceil(max)
        };
        out.push_str(&format!(
            "  {} {} {}\n",
            pad_to_width(&bucket.label(), 8),
            "█".repeat(bar_len).yellow(),
            bucket.count
        ));
    }
    out
}

pub fn render_detail(detail: &EmployeeDetail) -> String {
    let e = &detail.employee;
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n",
        e.full_name().bold(),
        format!("#{}", e.id).dimmed()
    ));
    out.push_str(&format!(
        "{}  {}\n",
        department_color(e.department, e.department.name()),
        stars(e.rating).yellow()
    ));
    out.push('\n');
    out.push_str(&format!("  Email       {}\n", e.email));
    if !detail.phone.is_empty() {
        out.push_str(&format!("  Phone       {}\n", detail.phone));
    }
    out.push_str(&format!("  Age         {}\n", e.age));
    out.push_str(&format!(
        "  Location    {}, {}\n",
        e.address.city, e.address.state
    ));
    out.push_str(&format!(
        "  Experience  {} years\n",
        detail.years_of_experience
    ));

    out.push('\n');
    out.push_str(&format!("{}\n", detail.bio));

    out.push('\n');
    out.push_str(&format!("{}\n", "Projects".bold()));
    for project in &detail.projects {
        out.push_str(&format!("  - {}\n", project));
    }

    out.push('\n');
    out.push_str(&format!("{}\n", "Feedback".bold()));
    for feedback in &detail.feedback {
        out.push_str(&format!(
            "  {} {} {}\n",
            feedback.period.dimmed(),
            stars(feedback.rating).yellow(),
            feedback.comment
        ));
    }
    out
}

pub fn render_config(config: &DashConfig) -> String {
    let mut out = String::new();
    for (key, value) in config.entries() {
        out.push_str(&format!("{} = {}\n", pad_to_width(key, 12).bold(), value));
    }
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
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

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfdash::commands::stats::{department_breakdown, rating_histogram, summary_stats};
    use perfdash::model::{Address, Employee, EmployeeId, Feedback};

    fn employee(id: u32, first: &str, last: &str, department: Department, rating: u8) -> Employee {
        Employee {
            id: EmployeeId(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            age: 31,
            image: None,
            address: Address {
                city: "Phoenix".to_string(),
                state: "Arizona".to_string(),
            },
            department,
            rating: Rating::new(rating).unwrap(),
        }
    }

    fn team() -> Vec<Employee> {
        vec![
            employee(1, "Emily", "Johnson", Department::Engineering, 5),
            employee(2, "Michael", "Williams", Department::Engineering, 3),
            employee(3, "Sophia", "Brown", Department::Sales, 4),
        ]
    }

    #[test]
    fn stars_fill_from_the_left() {
        assert_eq!(stars(Rating::new(3).unwrap()), "★★★☆☆");
        assert_eq!(stars(Rating::new(5).unwrap()), "★★★★★");
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // Wide characters count double.
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn list_shows_one_line_per_employee_plus_header() {
        let rows: Vec<ListedEmployee> = team()
            .into_iter()
            .map(|employee| ListedEmployee {
                bookmarked: employee.id == EmployeeId(3),
                employee,
            })
            .collect();

        let output = render_employee_list(&rows);
        assert_eq!(output.lines().count(), 4);
        assert!(output.contains("Emily Johnson"));
        assert!(output.contains("Engineering"));
        let sophia = output.lines().find(|l| l.contains("Sophia")).unwrap();
        assert!(sophia.contains(BOOKMARK_MARKER));
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert!(render_employee_list(&[]).is_empty());
    }

    #[test]
    fn analytics_contains_every_section() {
        let team = team();
        let summary = summary_stats(&team);
        let analytics = Analytics {
            performance_rate: summary.performance_rate(),
            summary,
            departments: department_breakdown(&team),
            ratings: rating_histogram(&team),
        };

        let output = render_analytics(&analytics);
        assert!(output.contains("Total employees    3"));
        assert!(output.contains("Average rating     4.0"));
        assert!(output.contains("Performance rate   67%"));
        assert!(output.contains("1 Star"));
        assert!(output.contains("5 Stars"));
        assert!(output.contains("Sales"));
    }

    #[test]
    fn analytics_of_empty_team() {
        let analytics = Analytics {
            summary: summary_stats(&[]),
            performance_rate: 0,
            departments: vec![],
            ratings: rating_histogram(&[]),
        };
        let output = render_analytics(&analytics);
        assert!(output.contains("Average rating     0.0"));
        assert!(output.contains("No departments."));
    }

    #[test]
    fn detail_lists_projects_and_feedback() {
        let detail = EmployeeDetail {
            employee: employee(7, "Ava", "Taylor", Department::Marketing, 4),
            phone: "+1 555-0100".to_string(),
            bio: "Experienced professional.".to_string(),
            years_of_experience: 6,
            projects: vec!["Project Alpha - Q4 2023".to_string()],
            feedback: vec![Feedback {
                period: "2023-Q4".to_string(),
                rating: Rating::new(5).unwrap(),
                comment: "Excellent performance this quarter!".to_string(),
            }],
        };

        let output = render_detail(&detail);
        assert!(output.contains("Ava Taylor"));
        assert!(output.contains("+1 555-0100"));
        assert!(output.contains("Experience  6 years"));
        assert!(output.contains("Project Alpha - Q4 2023"));
        assert!(output.contains("2023-Q4"));
    }

    #[test]
    fn bookmarks_show_when_added() {
        let rows = vec![ListedEmployee {
            employee: employee(1, "Emily", "Johnson", Department::Engineering, 5),
            bookmarked: true,
        }];
        let entries = vec![Bookmark {
            id: EmployeeId(1),
            added_at: Utc::now() - chrono::Duration::minutes(5),
        }];

        let output = render_bookmarks(&rows, &entries);
        assert!(output.contains("Emily Johnson"));
        assert!(output.contains("minutes ago"));
    }

    #[test]
    fn config_lists_all_keys() {
        let output = render_config(&DashConfig::default());
        assert!(output.contains("base-url"));
        assert!(output.contains("https://dummyjson.com"));
        assert!(output.contains("assign-mode"));
    }

    #[test]
    fn messages_keep_their_text() {
        let output = render_messages(&[
            CmdMessage::info("Total bookmarks: 2"),
            CmdMessage::warning("Not in the current data: 77"),
        ]);
        assert!(output.contains("Total bookmarks: 2"));
        assert!(output.contains("Not in the current data: 77"));
        assert!(render_messages(&[]).is_empty());
    }

    #[test]
    fn json_output_skips_empty_sections() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("done"));
        let json = render_json(&result).unwrap();
        assert!(json.contains("\"success\""));
        assert!(!json.contains("listed_employees"));
    }
}
