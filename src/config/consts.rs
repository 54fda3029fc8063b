/// Task that greets the `name` input and publishes the greeting
pub const GREETING_TASK: &str = "greeting";
/// Task that greets `who-to-greet` and publishes the time of day
pub const HELLO_TIME_TASK: &str = "hello_time";

pub const DEFAULT_GREETING_INPUT: &str = "name";
pub const DEFAULT_GREETING_OUTPUT: &str = "greeting";
pub const DEFAULT_GREETING_TEMPLATE: &str =
    "Hello, {value}! Welcome to your custom GitHub Action.";

pub const DEFAULT_HELLO_TIME_INPUT: &str = "who-to-greet";
pub const DEFAULT_HELLO_TIME_OUTPUT: &str = "time";

/// Placeholder replaced with the input value in greeting templates
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// chrono format for the published time of day, e.g. `14:03:22 GMT+0000`
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S GMT%z";

/// Environment variable consulted for a config path when none is passed on the command line
pub const CONFIG_PATH_ENV: &str = "GREETING_ACTION_CONFIG";
