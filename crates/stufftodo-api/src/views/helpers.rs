//! View helpers: progress aggregation, estimate totals, filter optgroups.

use stufftodo_models::{FilterOption, Issue};

/// Filter groups the sidebar knows how to render. Anything else in the
/// input is skipped without error.
const RECOGNIZED_GROUPS: [&str; 3] = ["users", "priorities", "statuses"];

/// Pass-through configuration for the progress-bar widget.
#[derive(Debug, Clone)]
pub struct ProgressBarOptions {
    /// CSS width of the whole bar.
    pub width: String,
    /// CSS class on the outer element.
    pub css_class: String,
    /// Optional legend rendered after the bar.
    pub legend: Option<String>,
}

impl Default for ProgressBarOptions {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            css_class: "progress".to_string(),
            legend: None,
        }
    }
}

/// Renders the progress-bar widget for a single percentage value.
///
/// The fill width is capped at 100% for display; the printed value is the
/// one given.
pub fn progress_bar(percent: u64, opts: &ProgressBarOptions) -> String {
    let fill = percent.min(100);
    let mut html = format!(
        "<div class=\"{}\" style=\"width: {};\">\
         <div class=\"done\" style=\"width: {}%;\"></div>\
         </div><span class=\"percent\">{}%</span>",
        escape(&opts.css_class),
        escape(&opts.width),
        fill,
        percent,
    );
    if let Some(legend) = &opts.legend {
        html.push_str(&format!(" <span class=\"legend\">{}</span>", escape(legend)));
    }
    html
}

/// Averages a numeric field across `items` and renders a progress bar for
/// the result.
///
/// The average uses integer division, truncating toward zero. An empty
/// collection renders nothing rather than dividing by zero.
pub fn progress_bar_sum<T, F>(items: &[T], field: F, opts: &ProgressBarOptions) -> Option<String>
where
    F: Fn(&T) -> u64,
{
    if items.is_empty() {
        return None;
    }
    let total: u64 = items.iter().map(&field).sum();
    let average = total / items.len() as u64;
    Some(progress_bar(average, opts))
}

/// Sums the estimated hours of `issues`, skipping issues without an
/// estimate. Empty or all-unestimated input sums to zero.
pub fn total_estimates(issues: &[Issue]) -> f32 {
    issues.iter().filter_map(|issue| issue.estimated_hours).sum()
}

/// Renders `<optgroup>` markup for the recognized filter groups, in the
/// order the input lists them.
///
/// Each option's value is `"{group}-{id}"`; its text is the option label.
/// Unrecognized groups contribute nothing.
pub fn filter_options(filters: &[(String, Vec<FilterOption>)]) -> String {
    let mut html = String::new();
    for (group, options) in filters {
        if !RECOGNIZED_GROUPS.contains(&group.as_str()) {
            continue;
        }

        html.push_str(&format!("<optgroup label=\"{}\">", capitalize(group)));
        for option in options {
            html.push_str(&format!(
                "<option value=\"{}-{}\">{}</option>",
                group,
                option.id,
                escape(&option.label)
            ));
        }
        html.push_str("</optgroup>");
    }
    html
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
