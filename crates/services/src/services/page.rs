//! Persistence-facing page operations: slug normalization, input validation,
//! template reconciliation, and translation of store errors into the page
//! error taxonomy.

use std::sync::LazyLock;

use db::models::page::{
    CreatePage, NewPage, Page, PageChanges, PageStatus, PageTemplate, UpdatePage,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;
use ts_rs::TS;
use utils::text::{normalize_slug, sanitize_optional};

use super::benefits_template::{self, BenefitsTemplateOverride};

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z0-9-]+$").expect("slug pattern is valid"));

/// A single field-level validation problem, reported back to the editor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct ValidationErrors {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.issues.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    fn into_result(self) -> Result<(), PageError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(PageError::Validation(self))
        }
    }
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Validation failed")]
    Validation(ValidationErrors),
    #[error("Slug already exists. Choose a unique slug.")]
    DuplicateSlug,
    #[error("Page not found")]
    NotFound,
    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// The store signals uniqueness violations through the driver error; every
/// other failure stays a storage error.
fn translate_store_error(error: sqlx::Error) -> PageError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            PageError::DuplicateSlug
        }
        _ => PageError::Storage(error),
    }
}

fn validate_slug(slug: &str, errors: &mut ValidationErrors) {
    if slug.chars().count() < 2 {
        errors.push("slug", "Slug must contain at least 2 characters");
    }
    if !SLUG_PATTERN.is_match(slug) {
        errors.push(
            "slug",
            "Only lowercase letters, numbers and dashes are allowed",
        );
    }
}

fn validate_title(title: &str, errors: &mut ValidationErrors) {
    if title.chars().count() < 3 {
        errors.push("title", "Title must contain at least 3 characters");
    }
}

/// Parse an editor-supplied template payload into the override shape.
/// Type-shape mismatches are reported as a validation issue on the field.
fn parse_template_override(
    value: Option<&JsonValue>,
) -> Result<Option<BenefitsTemplateOverride>, PageError> {
    match value {
        None | Some(JsonValue::Null) => Ok(None),
        Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|error| {
            let mut errors = ValidationErrors::default();
            errors.push("templateData", &format!("Invalid template data: {error}"));
            PageError::Validation(errors)
        }),
    }
}

fn merged_template_value(override_value: Option<&JsonValue>) -> Result<JsonValue, PageError> {
    let overrides = parse_template_override(override_value)?;
    let merged = benefits_template::merge_template_data(overrides.as_ref());
    let value =
        serde_json::to_value(&merged).map_err(|error| sqlx::Error::Protocol(error.to_string()))?;
    Ok(value)
}

pub struct PageService;

impl PageService {
    pub async fn create(pool: &SqlitePool, input: CreatePage) -> Result<Page, PageError> {
        let slug = normalize_slug(&input.slug);
        let title = input.title.trim().to_string();

        let mut errors = ValidationErrors::default();
        validate_slug(&slug, &mut errors);
        validate_title(&title, &mut errors);
        errors.into_result()?;

        let template = input.template.clone().unwrap_or_default();
        let (template_data, selected_components) = match template {
            PageTemplate::Default => (None, Vec::new()),
            PageTemplate::BenefitsForPatients => (
                Some(merged_template_value(input.template_data.as_ref())?),
                input.selected_components.clone().unwrap_or_default(),
            ),
        };

        let record = NewPage {
            slug,
            title,
            excerpt: sanitize_optional(input.excerpt.as_deref()),
            hero_title: sanitize_optional(input.hero_title.as_deref()),
            hero_subtitle: sanitize_optional(input.hero_subtitle.as_deref()),
            hero_image: sanitize_optional(input.hero_image.as_deref()),
            content: input.content.as_deref().unwrap_or_default().trim().to_string(),
            status: input.status.clone().unwrap_or_default(),
            template,
            template_data,
            selected_components,
            seo_title: sanitize_optional(input.seo_title.as_deref()),
            seo_description: sanitize_optional(input.seo_description.as_deref()),
        };

        let page = Page::create(pool, &record)
            .await
            .map_err(translate_store_error)?;
        info!(slug = %page.slug, status = %page.status, template = %page.template, "created page");
        Ok(page)
    }

    pub async fn update(
        pool: &SqlitePool,
        slug: &str,
        input: UpdatePage,
    ) -> Result<Page, PageError> {
        let lookup = normalize_slug(slug);
        let new_slug = input.slug.as_deref().map(normalize_slug);
        let new_title = input.title.as_deref().map(|title| title.trim().to_string());

        let mut errors = ValidationErrors::default();
        if let Some(candidate) = &new_slug {
            validate_slug(candidate, &mut errors);
        }
        if let Some(candidate) = &new_title {
            validate_title(candidate, &mut errors);
        }
        errors.into_result()?;

        let mut changes = PageChanges {
            slug: new_slug,
            title: new_title,
            content: input.content.as_deref().map(|c| c.trim().to_string()),
            status: input.status.clone(),
            excerpt: input
                .excerpt
                .as_deref()
                .map(|value| sanitize_optional(Some(value))),
            hero_title: input
                .hero_title
                .as_deref()
                .map(|value| sanitize_optional(Some(value))),
            hero_subtitle: input
                .hero_subtitle
                .as_deref()
                .map(|value| sanitize_optional(Some(value))),
            hero_image: input
                .hero_image
                .as_deref()
                .map(|value| sanitize_optional(Some(value))),
            seo_title: input
                .seo_title
                .as_deref()
                .map(|value| sanitize_optional(Some(value))),
            seo_description: input
                .seo_description
                .as_deref()
                .map(|value| sanitize_optional(Some(value))),
            selected_components: input.selected_components.clone(),
            ..PageChanges::default()
        };

        // Switching to the free-form template clears the structured payload;
        // any structured submission is reconciled against the defaults before
        // it is written.
        match &input.template {
            Some(PageTemplate::Default) => {
                changes.template = Some(PageTemplate::Default);
                changes.template_data = Some(None);
                changes.selected_components = Some(Vec::new());
            }
            Some(PageTemplate::BenefitsForPatients) => {
                let override_value = input.template_data.clone().flatten();
                changes.template = Some(PageTemplate::BenefitsForPatients);
                changes.template_data = Some(Some(merged_template_value(override_value.as_ref())?));
            }
            None => match &input.template_data {
                Some(Some(value)) => {
                    changes.template_data = Some(Some(merged_template_value(Some(value))?));
                }
                Some(None) => {
                    changes.template_data = Some(None);
                }
                None => {}
            },
        }

        let updated = Page::update(pool, &lookup, &changes)
            .await
            .map_err(translate_store_error)?;

        match updated {
            Some(page) => {
                info!(slug = %lookup, new_slug = %page.slug, "updated page");
                Ok(page)
            }
            None => Err(PageError::NotFound),
        }
    }

    pub async fn delete(pool: &SqlitePool, slug: &str) -> Result<(), PageError> {
        let normalized = normalize_slug(slug);
        let removed = Page::delete(pool, &normalized)
            .await
            .map_err(translate_store_error)?;
        if removed == 0 {
            return Err(PageError::NotFound);
        }
        info!(slug = %normalized, "deleted page");
        Ok(())
    }

    /// Read path: absence is `None`, not an error.
    pub async fn get_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Page>, PageError> {
        Ok(Page::find_by_slug(pool, &normalize_slug(slug)).await?)
    }

    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Page>, PageError> {
        Ok(Page::find_all(pool).await?)
    }

    pub async fn list_published(pool: &SqlitePool) -> Result<Vec<Page>, PageError> {
        Ok(Page::find_by_status(pool, PageStatus::Published).await?)
    }
}
