//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use catalog_search::{MatchKind, ScoredResult, SearchPage, Suggestion};
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Short label for how an item matched the query
pub fn match_label(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::ExactTitle => "exact title",
        MatchKind::TitleContains => "title",
        MatchKind::DescriptionContains => "description",
        MatchKind::FuzzyOnly => "fuzzy",
    }
}

/// One-line summary of a results page, e.g. `45 results, page 1 of 3`
pub fn page_summary<T>(page: &SearchPage<T>) -> String {
    if page.total_count == 0 {
        return "no results".to_string();
    }
    format!(
        "{}, page {} of {}",
        format_count(page.total_count, "result", "results"),
        page.current_page,
        page.total_pages.max(1)
    )
}

/// Score of a result written out as the product of its factors
pub fn explain_line(result: &ScoredResult) -> String {
    let b = &result.breakdown;
    format!(
        "score {:.3} = tf {:.1} × boost {:.1} ({}) × rating {:.2}",
        result.score,
        b.term_frequency,
        b.boost,
        match_label(b.match_kind),
        b.rating_factor
    )
}

/// Print a page of search results
///
/// `limit` is the page size the page was requested with. With `explain`
/// set, each row also shows its score components.
pub fn print_page(query: &str, page: &SearchPage<ScoredResult>, limit: usize, explain: bool) {
    Status::header(&format!("Results for \"{query}\""));

    if page.items.is_empty() {
        Status::info(&page_summary(page));
        return;
    }

    let offset = page.current_page.saturating_sub(1) * limit;
    for (i, result) in page.items.iter().enumerate() {
        let item = &result.item;
        println!(
            "{:>3}. {}  {}  {}",
            offset + i + 1,
            item.title.bold(),
            format!("${:.2}", item.price).dimmed(),
            format!("★ {:.1}", item.weighted_rating).yellow()
        );

        if explain {
            println!("     {}", explain_line(result).dimmed());
        }
    }

    println!();
    println!("{}", page_summary(page).dimmed());
    if page.has_next() {
        println!("{}", format!("more on page {}", page.current_page + 1).dimmed());
    }
}

/// Print title suggestions
pub fn print_suggestions(partial: &str, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        Status::info(&format!("No suggestions for \"{partial}\""));
        return;
    }

    for suggestion in suggestions {
        match &suggestion.category {
            Some(category) => println!("{}  {}", suggestion.text, category.dimmed()),
            None => println!("{}", suggestion.text),
        }
    }
}
