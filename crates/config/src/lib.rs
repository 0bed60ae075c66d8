mod articles;
mod config;
mod feeds;
mod integrations;
mod links;
mod markdown;
mod pagination;
mod site;
mod statics;
mod theme;

pub mod path;

pub use self::articles::*;
pub use self::config::*;
pub use self::feeds::*;
pub use self::integrations::*;
pub use self::links::*;
pub use self::markdown::*;
pub use self::pagination::*;
pub use self::path::RelPath;
pub use self::site::*;
pub use self::statics::*;
pub use self::theme::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
