mod status;
pub use status::{CLEANUP_STATUSES, StackStatus};

mod detail;
pub use detail::{StackDetail, StackSummary};
