#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod articles;
pub mod error;
pub mod permalink;
pub mod siteconf_model;
pub mod statics;

pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::siteconf_model::Config;
