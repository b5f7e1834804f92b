//! Environment variable names recognized by the notifier.

pub const WEBHOOK_URL: &str = "PLUGIN_WEBHOOK_URL";
pub const DEBUG: &str = "PLUGIN_DEBUG";
pub const STATUS_OVERRIDE: &str = "PLUGIN_STATUS";
pub const FACTS: &str = "PLUGIN_FACTS";
pub const BUTTONS: &str = "PLUGIN_BUTTONS";
pub const VARIABLES: &str = "PLUGIN_VARIABLES";

pub const BUILD_STATUS: &str = "DRONE_BUILD_STATUS";

pub const COMMIT_TAG: &str = "CI_COMMIT_TAG";
pub const COMMIT_SHA: &str = "CI_COMMIT_SHA";
pub const COMMIT_AUTHOR: &str = "CI_COMMIT_AUTHOR";
pub const COMMIT_AUTHOR_AVATAR: &str = "CI_COMMIT_AUTHOR_AVATAR";
pub const COMMIT_MESSAGE: &str = "CI_COMMIT_MESSAGE";
pub const REPO: &str = "CI_REPO";
pub const REPO_URL: &str = "CI_REPO_URL";
pub const PIPELINE_URL: &str = "CI_PIPELINE_URL";
pub const PIPELINE_FORGE_URL: &str = "CI_PIPELINE_FORGE_URL";
