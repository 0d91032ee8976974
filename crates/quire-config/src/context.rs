//! Per-locale build context.
//!
//! Renderers receive the configuration through a [`BuildContext`] instead of
//! reading shared state, so builds for different locales stay independent.

use crate::schema::SiteConfig;

/// The configuration and locale a single build runs with.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    config: &'a SiteConfig,
    locale: &'a str,
}

impl<'a> BuildContext<'a> {
    /// Context for `locale`, or `None` if the site does not declare it.
    pub fn new(config: &'a SiteConfig, locale: &str) -> Option<Self> {
        config
            .i18n
            .locales
            .iter()
            .find(|l| l.as_str() == locale)
            .map(|locale| Self { config, locale })
    }

    /// Context for the default locale.
    pub fn default_locale(config: &'a SiteConfig) -> Self {
        Self {
            config,
            locale: &config.i18n.default_locale,
        }
    }

    pub fn config(&self) -> &'a SiteConfig {
        self.config
    }

    pub fn locale(&self) -> &'a str {
        self.locale
    }

    pub fn is_default_locale(&self) -> bool {
        self.locale == self.config.i18n.default_locale
    }

    /// Base URL for this locale; non-default locales live under `/<locale>/`.
    pub fn base_url(&self) -> String {
        if self.is_default_locale() {
            self.config.base_url.clone()
        } else {
            format!("{}{}/", self.config.base_url, self.locale)
        }
    }

    /// Site path for a site-relative `path`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Absolute URL for a site-relative `path`.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.config.url, self.url_for(path))
    }
}

impl SiteConfig {
    /// One build context per declared locale, default locale first.
    pub fn contexts(&self) -> impl Iterator<Item = BuildContext<'_>> {
        std::iter::once(BuildContext::default_locale(self)).chain(
            self.i18n
                .locales
                .iter()
                .filter(move |l| **l != self.i18n.default_locale)
                .map(move |locale| BuildContext {
                    config: self,
                    locale,
                }),
        )
    }
}
