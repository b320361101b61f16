use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool, Type, types::Json};
use strum_macros::{Display, EnumString};
use ts_rs::TS;

#[derive(
    Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default,
)]
#[sqlx(type_name = "page_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
}

/// Rendering/editing mode of a page: free-form content or the structured
/// patient-benefits block set.
#[derive(
    Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default,
)]
#[sqlx(type_name = "page_template", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PageTemplate {
    #[default]
    Default,
    BenefitsForPatients,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_image: Option<String>,
    pub content: String,
    pub status: PageStatus,
    pub template: PageTemplate,
    #[ts(type = "unknown | null")]
    pub template_data: Option<JsonValue>,
    #[ts(type = "Array<string>")]
    pub selected_components: Json<Vec<String>>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a page.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePage {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<PageStatus>,
    #[serde(default)]
    pub template: Option<PageTemplate>,
    #[serde(default)]
    #[ts(type = "unknown | null")]
    pub template_data: Option<JsonValue>,
    #[serde(default)]
    pub selected_components: Option<Vec<String>>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

/// Request body for partially updating a page. Absent fields are left
/// untouched in storage; `template_data` distinguishes absent from an
/// explicit null, which clears the column.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePage {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<PageStatus>,
    #[serde(default)]
    pub template: Option<PageTemplate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[ts(type = "unknown | null")]
    pub template_data: Option<Option<JsonValue>>,
    #[serde(default)]
    pub selected_components: Option<Vec<String>>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

/// Fully normalized record ready for insertion.
#[derive(Debug, Clone)]
pub struct NewPage {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_image: Option<String>,
    pub content: String,
    pub status: PageStatus,
    pub template: PageTemplate,
    pub template_data: Option<JsonValue>,
    pub selected_components: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

/// Sparse update record. `None` leaves the column untouched; the inner
/// `Option` on nullable columns writes NULL when `Some(None)`.
#[derive(Debug, Clone, Default)]
pub struct PageChanges {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<Option<String>>,
    pub hero_title: Option<Option<String>>,
    pub hero_subtitle: Option<Option<String>>,
    pub hero_image: Option<Option<String>>,
    pub content: Option<String>,
    pub status: Option<PageStatus>,
    pub template: Option<PageTemplate>,
    pub template_data: Option<Option<JsonValue>>,
    pub selected_components: Option<Vec<String>>,
    pub seo_title: Option<Option<String>>,
    pub seo_description: Option<Option<String>>,
}

impl Page {
    pub async fn create(pool: &SqlitePool, data: &NewPage) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Page>(
            r#"INSERT INTO pages (slug, title, excerpt, hero_title, hero_subtitle, hero_image, content, status, template, template_data, selected_components, seo_title, seo_description)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
               RETURNING *"#,
        )
        .bind(&data.slug)
        .bind(&data.title)
        .bind(&data.excerpt)
        .bind(&data.hero_title)
        .bind(&data.hero_subtitle)
        .bind(&data.hero_image)
        .bind(&data.content)
        .bind(&data.status)
        .bind(&data.template)
        .bind(&data.template_data)
        .bind(Json(&data.selected_components))
        .bind(&data.seo_title)
        .bind(&data.seo_description)
        .fetch_one(pool)
        .await
    }

    /// Apply a sparse update. Returns `None` when no row matches the slug.
    pub async fn update(
        pool: &SqlitePool,
        slug: &str,
        changes: &PageChanges,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE pages SET ");
        let mut fields = builder.separated(", ");

        if let Some(value) = &changes.slug {
            fields.push("slug = ").push_bind_unseparated(value);
        }
        if let Some(value) = &changes.title {
            fields.push("title = ").push_bind_unseparated(value);
        }
        if let Some(value) = &changes.excerpt {
            fields.push("excerpt = ").push_bind_unseparated(value.clone());
        }
        if let Some(value) = &changes.hero_title {
            fields
                .push("hero_title = ")
                .push_bind_unseparated(value.clone());
        }
        if let Some(value) = &changes.hero_subtitle {
            fields
                .push("hero_subtitle = ")
                .push_bind_unseparated(value.clone());
        }
        if let Some(value) = &changes.hero_image {
            fields
                .push("hero_image = ")
                .push_bind_unseparated(value.clone());
        }
        if let Some(value) = &changes.content {
            fields.push("content = ").push_bind_unseparated(value);
        }
        if let Some(value) = &changes.status {
            fields.push("status = ").push_bind_unseparated(value);
        }
        if let Some(value) = &changes.template {
            fields.push("template = ").push_bind_unseparated(value);
        }
        if let Some(value) = &changes.template_data {
            fields
                .push("template_data = ")
                .push_bind_unseparated(value.clone());
        }
        if let Some(value) = &changes.selected_components {
            fields
                .push("selected_components = ")
                .push_bind_unseparated(Json(value.clone()));
        }
        if let Some(value) = &changes.seo_title {
            fields
                .push("seo_title = ")
                .push_bind_unseparated(value.clone());
        }
        if let Some(value) = &changes.seo_description {
            fields
                .push("seo_description = ")
                .push_bind_unseparated(value.clone());
        }
        fields.push("updated_at = datetime('now', 'subsec')");

        builder.push(" WHERE slug = ").push_bind(slug);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<Page>()
            .fetch_optional(pool)
            .await
    }

    /// Returns the number of rows removed (0 when the slug is unknown).
    pub async fn delete(pool: &SqlitePool, slug: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Page>("SELECT * FROM pages WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Page>("SELECT * FROM pages ORDER BY updated_at DESC")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_status(
        pool: &SqlitePool,
        status: PageStatus,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Page>(
            "SELECT * FROM pages WHERE status = $1 ORDER BY updated_at DESC",
        )
        .bind(status)
        .fetch_all(pool)
        .await
    }
}
