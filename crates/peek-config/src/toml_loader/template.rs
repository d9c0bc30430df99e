//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# QuickPeek Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "QuickPeek"
# width = 1000           # first-run size; later runs restore the last size
# height = 750
# decorations = "none"   # none (frameless), full
# always_on_top = false
# icon = "/path/to/icon.png"

[settings_dialog]
# title = "Settings"
# width = 450
# height = 250

[player]
# default_url = "https://www.baidu.com"
# default_zoom = 1.0     # 0.25-5.0
# fallback_url = "https://www.baidu.com"
# bounds_slack = 5.0     # 0-100 px of tolerance for view bounds requests
# isolation_enabled = true
# isolation_delay_ms = 2500   # 0-60000
# user_agent = "QuickPeek/0.1"
# devtools = false

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
