//! hello-content - a landing page whose copy comes from coppy
//!
//! `content.json` is turned into typed content at build time; [`Site`] keeps the
//! live copy and refreshes it from a [`ContentFetcher`].

use coppy_runtime::{
    ContentConfig, ContentFetcher, ContentHandle, ContentResult, ContentStore, RefreshOutcome,
    apply_pending, refresh,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub mod content {
    include!(concat!(env!("OUT_DIR"), "/content.rs"));
}

use content::CoppyContent;

/// The running site: live content plus where it is persisted
pub struct Site {
    config: ContentConfig,
    store: ContentStore,
    content: ContentHandle<CoppyContent>,
}

impl Site {
    /// Open the site, restoring content persisted by an earlier run
    pub fn open(data_dir: impl AsRef<Path>, config: ContentConfig) -> ContentResult<Self> {
        let store = ContentStore::new(data_dir, &config)?;
        let content = ContentHandle::restore_or_default(&store);
        info!(space = %config.space_key, "site opened");

        Ok(Self {
            config,
            store,
            content,
        })
    }

    pub fn content(&self) -> Arc<CoppyContent> {
        self.content.current()
    }

    /// Pull fresh copy from `fetcher`
    pub fn refresh(&self, fetcher: &dyn ContentFetcher) -> ContentResult<RefreshOutcome> {
        refresh(&self.content, &self.store, fetcher, &self.config)
    }

    /// Apply copy a background refresh left behind, e.g. when the app goes idle
    pub fn on_idle(&self) -> ContentResult<bool> {
        apply_pending(&self.content, &self.store)
    }
}

/// Plain-text rendering of the landing page
pub fn render_home(content: &CoppyContent) -> String {
    let mut page = String::new();

    page.push_str(&format!("# {}\n", content.title()));
    page.push_str(&format!("{}\n\n", content.subtitle()));

    let hero = content.hero();
    page.push_str(&format!("{}\n", hero.headline()));
    page.push_str(&format!("[{}]({})\n\n", hero.cta().label(), hero.cta().url()));

    for feature in content.features() {
        page.push_str(&format!("- {}", feature.name()));
        if let Some(badge) = feature.badge() {
            page.push_str(&format!(" ({badge})"));
        }
        if let Some(description) = feature.description() {
            page.push_str(&format!(": {description}"));
        }
        if let Some(link) = feature.link() {
            page.push_str(&format!(" -> {}", link.href()));
        }
        page.push('\n');
    }

    if !content.tags().is_empty() {
        page.push_str(&format!("\ntags: {}\n", content.tags().join(", ")));
    }

    page
}
