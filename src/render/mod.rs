//! @acp:module "Renderer"
//! @acp:summary "Handlebars rendering of the page shell and variant bodies"
//! @acp:domain cli
//! @acp:layer output
//!
//! Templates are compiled into the binary and registered once. The page shell
//! is always rendered; the variant body is only filled in once the page state
//! is resolved, so an unresolved page never shows any presentation.

pub mod helpers;

use chrono::{Datelike, NaiveDateTime};
use handlebars::Handlebars;
use serde::Serialize;

use crate::content::{Appearance, Content, Profile, Project, QuickLink, SocialLink, WritingItem};
use crate::error::{FolioError, Result};
use crate::resolver::PageState;
use crate::variant::{RegistryError, Variant, VariantRegistry};

const SHELL_TEMPLATE: &str = "shell";

const TEMPLATES: &[(&str, &str)] = &[
    (SHELL_TEMPLATE, include_str!("../../templates/shell.hbs")),
    ("variant_a", include_str!("../../templates/variant_a.hbs")),
    ("variant_b", include_str!("../../templates/variant_b.hbs")),
    ("variant_c", include_str!("../../templates/variant_c.hbs")),
    ("variant_d", include_str!("../../templates/variant_d.hbs")),
];

/// Data available to variant body templates
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    pub variant: &'a Variant,
    pub profile: &'a Profile,
    pub projects: &'a [Project],
    /// Writing without appearances
    pub writing: Vec<&'a WritingItem>,
    pub appearances: &'a [Appearance],
    pub quick_links: &'a [QuickLink],
    pub social_links: &'a [SocialLink],
    pub counts: SectionCounts,
    /// `HH:MM`
    pub clock: String,
    /// `HH:MM:SS`
    pub clock_seconds: String,
    /// `Jan 12, 2026`
    pub today: String,
    /// `1/12/2026`
    pub today_short: String,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SectionCounts {
    pub projects: usize,
    pub writing: usize,
    pub links: usize,
}

impl<'a> PageContext<'a> {
    pub fn new(variant: &'a Variant, content: &'a Content, now: NaiveDateTime) -> Self {
        let writing = content.visible_writing();
        let counts = SectionCounts {
            projects: content.projects.len(),
            writing: writing.len(),
            links: content.quick_links.len() + content.social_links.len(),
        };
        Self {
            variant,
            profile: &content.profile,
            projects: &content.projects,
            writing,
            appearances: &content.appearances,
            quick_links: &content.quick_links,
            social_links: &content.social_links,
            counts,
            clock: now.format("%H:%M").to_string(),
            clock_seconds: now.format("%H:%M:%S").to_string(),
            today: now.format("%b %-d, %Y").to_string(),
            today_short: now.format("%-m/%-d/%Y").to_string(),
            year: now.year(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ShellContext<'a> {
    title: &'a str,
    author: &'a str,
    year: i32,
    variant: Option<&'a Variant>,
    body: String,
}

/// Compiled template set
pub struct Renderer {
    hb: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut hb = Handlebars::new();
        helpers::register(&mut hb);
        for (name, source) in TEMPLATES {
            hb.register_template_string(name, source)?;
        }
        Ok(Self { hb })
    }

    /// Render the full HTML document for a page state.
    ///
    /// `Unresolved` yields the shell with an empty root element.
    pub fn render_page(
        &self,
        state: &PageState,
        registry: &VariantRegistry,
        content: &Content,
        now: NaiveDateTime,
    ) -> Result<String> {
        let (variant, body) = match state {
            PageState::Unresolved => (None, String::new()),
            PageState::Resolved(resolution) => {
                let variant = registry
                    .get(&resolution.variant)
                    .ok_or_else(|| RegistryError::Unknown(resolution.variant.to_string()))?;
                (Some(variant), self.render_variant(variant, content, now)?)
            }
        };

        let shell = ShellContext {
            title: &content.profile.name,
            author: &content.profile.name,
            year: now.year(),
            variant,
            body,
        };
        Ok(self.hb.render(SHELL_TEMPLATE, &shell)?)
    }

    /// Render only the body markup of one variant
    pub fn render_variant(&self, variant: &Variant, content: &Content, now: NaiveDateTime) -> Result<String> {
        if !self.hb.has_template(variant.template) {
            return Err(FolioError::Other(format!(
                "no template registered for variant {} ({})",
                variant.id, variant.template
            )));
        }
        let context = PageContext::new(variant, content, now);
        tracing::debug!("Rendering variant {} with template {}", variant.id, variant.template);
        Ok(self.hb.render(variant.template, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 12)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_context_clock_fields() {
        let content = Content::builtin();
        let registry = VariantRegistry::builtin();
        let context = PageContext::new(registry.at(0), &content, now());

        assert_eq!(context.clock, "09:05");
        assert_eq!(context.clock_seconds, "09:05:07");
        assert_eq!(context.today, "Jan 12, 2026");
        assert_eq!(context.today_short, "1/12/2026");
        assert_eq!(context.counts.links, 5);
        assert_eq!(context.counts.writing, 9);
    }

    #[test]
    fn test_every_builtin_variant_has_a_template() {
        let renderer = Renderer::new().unwrap();
        let content = Content::builtin();
        for variant in VariantRegistry::builtin().iter() {
            let body = renderer.render_variant(variant, &content, now()).unwrap();
            assert!(body.contains("George Nurijanian"), "variant {}", variant.id);
        }
    }
}
