mod report;
mod sanitize;

pub use report::{record_player_url, write_crash_report};
pub use sanitize::sanitize_secrets;
