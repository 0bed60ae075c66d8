mod article;
mod config;
mod site;
mod validate;

pub use siteconf_config::Link;
pub use siteconf_config::Permalink;
pub use siteconf_config::RelPath;

pub use self::article::ArticleMeta;
pub use self::config::Config;
pub use self::config::FeedTargets;
pub use self::validate::Issue;
pub use self::validate::ValidationErrors;
