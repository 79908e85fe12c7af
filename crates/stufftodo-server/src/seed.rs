//! Demo data for running the server without a tracker behind it.

use stufftodo_models::{Issue, IssueId, IssueStatus, Priority, User, UserId};
use stufftodo_worklist::{InMemoryUserDirectory, InMemoryWorklist};

/// Seeds two users: Jane (ID 1) with a full worklist, and an administrator
/// (ID 2) who can view it via `?user_id=1`.
pub fn demo_data(worklist: &InMemoryWorklist, users: &InMemoryUserDirectory) {
    users.insert(User::new(1, "jdoe", "Jane Doe"));
    users.insert(User::new(2, "admin", "Ada Min").as_admin());

    let jane = UserId::new(1);
    let subjects = [
        "Fix login redirect loop",
        "Add CSV export to reports",
        "Upgrade database driver",
        "Broken pagination on search",
        "Write onboarding docs",
        "Flaky notification test",
        "Cache invalidation on profile edit",
        "Rate limit the public API",
        "Dark mode toggle",
        "Migrate avatars to object storage",
        "Audit log retention policy",
        "Slow dashboard query",
        "Duplicate webhook deliveries",
        "Accessibility pass on forms",
        "Session timeout banner",
        "Archive stale projects",
        "Retry failed imports",
        "Localize date formats",
        "Compress email attachments",
        "Cleanup orphaned uploads",
        "Spike: full-text search",
    ];

    for (i, subject) in subjects.iter().enumerate() {
        let id = i as u32 + 1;
        let issue = Issue::new(id, *subject)
            .assigned_to(jane)
            .with_priority(if id % 5 == 0 { Priority::Urgent } else { Priority::Normal })
            .with_status(if id <= 5 { IssueStatus::InProgress } else { IssueStatus::New })
            .with_done_ratio((id * 7) % 100)
            .with_estimate(0.5 * id as f32);
        worklist.assign(jane, issue);
    }

    // Rank the first 15: 5 doing now, 10 recommended, the rest available.
    worklist.set_order(jane, (1..=15).map(IssueId::new).collect());
}
