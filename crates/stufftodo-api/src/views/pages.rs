//! Page and fragment assembly for the worklist.

use stufftodo_models::{FilterOption, Issue, User};

use crate::views::helpers::{escape, filter_options, progress_bar_sum, total_estimates, ProgressBarOptions};

/// The standard unauthorized page, served with 403 in every format.
pub fn unauthorized() -> String {
    concat!(
        "<!DOCTYPE html><html><head><title>403</title></head>",
        "<body><h1>403</h1>",
        "<p>You are not authorized to access this page.</p>",
        "</body></html>",
    )
    .to_string()
}

/// The doing-now and recommended panes, also served alone as the reorder
/// partial in the `js` format.
pub fn panes(doing_now: &[Issue], recommended: &[Issue]) -> String {
    format!(
        "<div id=\"panes\">{}{}</div>",
        pane("doing-now", "Doing Now", doing_now),
        pane("recommended", "Recommended", recommended),
    )
}

/// The full index page for a target user's worklist.
pub fn index(
    target: &User,
    doing_now: &[Issue],
    recommended: &[Issue],
    available: &[Issue],
    filters: &[(String, Vec<FilterOption>)],
) -> String {
    let progress = progress_bar_sum(
        doing_now,
        |issue| issue.done_ratio as u64,
        &ProgressBarOptions {
            legend: Some("of what you are doing now".to_string()),
            ..ProgressBarOptions::default()
        },
    )
    .unwrap_or_default();

    let mut next_issues = doing_now.to_vec();
    next_issues.extend_from_slice(recommended);
    let estimate = total_estimates(&next_issues);

    format!(
        "<!DOCTYPE html><html><head><title>Stuff To Do</title></head><body>\
         <h1>Stuff To Do</h1>\
         <p class=\"for-user\">{}</p>\
         <div class=\"summary\">{}<p class=\"estimate\">{:.1} hours estimated</p></div>\
         {}{}\
         <select class=\"filters\" multiple>{}</select>\
         </body></html>",
        escape(&target.name),
        progress,
        estimate,
        panes(doing_now, recommended),
        pane("available", "Available", available),
        filter_options(filters),
    )
}

fn pane(id: &str, title: &str, issues: &[Issue]) -> String {
    let mut html = format!(
        "<div id=\"{}\" class=\"pane\"><h2>{} ({})</h2><ol>",
        id,
        title,
        issues.len()
    );
    for issue in issues {
        html.push_str(&format!(
            "<li id=\"issue-{}\">{}</li>",
            issue.id,
            escape(&issue.to_string())
        ));
    }
    html.push_str("</ol></div>");
    html
}
