use siteconf_config::path;

/// What an article template can be expanded from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleMeta {
    pub title: String,
    pub slug: Option<String>,
    pub date: Option<time::Date>,
    pub lang: Option<String>,
    pub category: Option<String>,
}

impl ArticleMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Derive the title, slug and date from a file name such as
    /// `2013-03-05-hello-world.md`.
    pub fn from_file_name(name: &str) -> Self {
        let mut split_name = path::split_ext(name);
        while split_name.1.is_some() {
            split_name = path::split_ext(split_name.0);
        }
        let (date, stem) = path::parse_file_stem(split_name.0);
        let slug = path::slugify(stem);
        Self {
            title: path::titleize_slug(&slug),
            slug: Some(slug),
            date,
            ..Default::default()
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_date(mut self, date: time::Date) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn slug(&self) -> String {
        self.slug
            .clone()
            .unwrap_or_else(|| path::slugify(&self.title))
    }

    /// Template variables; blank when the article doesn't carry the value.
    pub(crate) fn attributes(&self, default_lang: Option<&str>) -> liquid::Object {
        let mut attributes = liquid::Object::new();
        let mut insert = |key: &'static str, value: String| {
            attributes.insert(key.into(), liquid::model::Value::scalar(value));
        };

        insert("slug", self.slug());
        insert(
            "lang",
            self.lang
                .as_deref()
                .or(default_lang)
                .unwrap_or_default()
                .to_owned(),
        );
        insert(
            "category",
            self.category.as_deref().map(path::slugify).unwrap_or_default(),
        );

        match self.date {
            Some(date) => {
                let month = u8::from(date.month());
                insert("year", date.year().to_string());
                insert("month", format!("{month:02}"));
                insert("i_month", month.to_string());
                insert("day", format!("{:02}", date.day()));
                insert("i_day", date.day().to_string());
            }
            None => {
                for key in ["year", "month", "i_month", "day", "i_day"] {
                    insert(key, String::new());
                }
            }
        }

        attributes
    }
}
