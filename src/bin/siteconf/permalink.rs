use crate::args;
use crate::error::*;

/// Expand the article URL templates for a hypothetical article
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct PermalinkArgs {
    /// Article title
    pub(crate) title: String,

    /// Publish date [format: YYYY-MM-DD]
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<time::Date>,

    /// Slug to use instead of one derived from the title
    #[arg(long)]
    pub(crate) slug: Option<String>,

    /// Article language [default: site.language]
    #[arg(long)]
    pub(crate) lang: Option<String>,

    #[arg(long)]
    pub(crate) category: Option<String>,

    #[command(flatten, next_help_heading = "Config")]
    pub(crate) config: args::ConfigArgs,
}

impl PermalinkArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;

        let mut article = siteconf::siteconf_model::ArticleMeta::new(self.title.as_str());
        if let Some(date) = self.date {
            article = article.with_date(date);
        }
        if let Some(slug) = self.slug.as_deref() {
            article = article.with_slug(slug);
        }
        if let Some(lang) = self.lang.as_deref() {
            article = article.with_lang(lang);
        }
        if let Some(category) = self.category.as_deref() {
            article = article.with_category(category);
        }
        debug!("Expanding permalinks for {article:?}");

        anstream::println!("url: {}", config.article_url(&article)?);
        anstream::println!("save_as: {}", config.article_save_as(&article)?);

        Ok(())
    }
}

fn parse_date(value: &str) -> Result<time::Date, String> {
    siteconf_config::path::parse_date(value)
        .ok_or_else(|| format!("`{value}` is not a date like 2013-03-05"))
}
