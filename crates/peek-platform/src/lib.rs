pub mod crash_report;
pub mod dialog;
pub mod paths;

pub use dialog::show_fatal_error;
pub use paths::{
    config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir, state_file, ui_override_dir,
};
