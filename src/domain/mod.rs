pub mod derivations;
pub mod entities;
pub mod timeline;

pub use derivations::{
    DerivationError, days_until_target, days_until_target_on, is_overdue, is_overdue_on,
    local_rfc3339, local_rfc3339_with_offset, progress_percent,
};
pub use entities::{Case, Session, Task, TaskHistoryEntry, TaskStatus, User};
pub use timeline::{TimelineEvent, TimelineEventType, build_timeline};
