pub(crate) use anyhow::Result;
pub(crate) use log::{debug, info};
