use liquid::model::Value;
use siteconf_config::Link;

use super::Config;

impl Config {
    /// The `site` object handed to themes.  Unset values are left out.
    pub fn site_object(&self) -> liquid::Object {
        let mut attributes = liquid::Object::new();

        let site = &self.site;
        let scalars = [
            ("author", site.author.as_deref()),
            ("name", site.name.as_deref()),
            ("subtitle", site.subtitle.as_deref()),
            ("timezone", site.timezone.as_deref()),
            ("language", site.language.as_deref()),
            ("url", self.site_url()),
            ("analytics_id", self.integrations.analytics_id.as_deref()),
            ("comments_site", self.integrations.comments_site.as_deref()),
        ];
        for (key, value) in scalars {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                attributes.insert(key.into(), Value::scalar(value.to_owned()));
            }
        }
        if let Some(logo) = self.logo_url() {
            attributes.insert("logo_url".into(), Value::scalar(logo));
        }
        if let Some(favicon) = self.favicon_url() {
            attributes.insert("favicon_url".into(), Value::scalar(favicon));
        }
        attributes.insert("per_page".into(), Value::scalar(i64::from(self.per_page)));
        attributes.insert("relative_urls".into(), Value::scalar(self.relative_urls));

        let mut links = liquid::Object::new();
        for (name, collection) in self.link_collections() {
            if !collection.is_empty() {
                links.insert(name.into(), links_value(collection));
            }
        }
        if !links.is_empty() {
            attributes.insert("links".into(), Value::Object(links));
        }

        let mut feeds = liquid::Object::new();
        let targets = [
            ("all_atom", &self.feeds.all_atom),
            ("category_atom", &self.feeds.category_atom),
            ("translation_atom", &self.feeds.translation_atom),
        ];
        for (name, target) in targets {
            if let Some(target) = target {
                feeds.insert(name.into(), Value::scalar(target.as_str().to_owned()));
            }
        }
        if !feeds.is_empty() {
            attributes.insert("feeds".into(), Value::Object(feeds));
        }

        attributes
    }
}

fn links_value(links: &[Link]) -> Value {
    let links = links
        .iter()
        .map(|link| {
            let mut object = liquid::Object::new();
            object.insert("label".into(), Value::scalar(link.label.as_str().to_owned()));
            object.insert("url".into(), Value::scalar(link.url.as_str().to_owned()));
            Value::Object(object)
        })
        .collect();
    Value::Array(links)
}
