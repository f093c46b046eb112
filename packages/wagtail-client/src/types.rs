//! Wire types for the Wagtail pages API and the normalized article
//! shape served to callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A page listing response (`/pages/?search=...`).
#[derive(Debug, Clone, Deserialize)]
pub struct PageListing {
    pub meta: ListingMeta,
    pub items: Vec<PageItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingMeta {
    pub total_count: u64,
}

/// One item of a page listing. The listing carries only headline
/// fields; description and teaser image need a per-page detail fetch.
#[derive(Debug, Clone, Deserialize)]
pub struct PageItem {
    pub id: u64,
    pub title: String,
    pub meta: PageItemMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageItemMeta {
    #[serde(rename = "type")]
    pub kind: String,
    pub html_url: Option<String>,
    pub first_published_at: Option<String>,
}

/// The per-page detail response (`/pages/<id>`), reduced to the two
/// fields the listing lacks.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDetail {
    pub meta: PageDetailMeta,
    pub teaser_image_jpg: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageDetailMeta {
    pub search_description: Option<String>,
}

/// One normalized article search hit.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub url: Option<String>,
    /// Page category token, e.g. `articles.ArticlePage`.
    #[serde(rename = "type")]
    pub kind: String,
    pub first_published: Option<String>,
    pub description: Option<String>,
    pub teaser_image: Option<Value>,
}

impl Article {
    /// Combine a listing item with its (optional) detail response.
    pub fn from_parts(item: PageItem, detail: Option<PageDetail>) -> Self {
        let (description, teaser_image) = match detail {
            Some(detail) => (detail.meta.search_description, detail.teaser_image_jpg),
            None => (None, None),
        };
        Article {
            id: item.id,
            title: item.title,
            url: item.meta.html_url,
            kind: item.meta.kind,
            first_published: item.meta.first_published_at,
            description,
            teaser_image,
        }
    }
}

/// A name/value option for the article filter listings (time periods,
/// topics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub name: String,
    pub value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_deserializes_wagtail_shape() {
        let listing: PageListing = serde_json::from_value(json!({
            "meta": {"total_count": 42},
            "items": [{
                "id": 7,
                "title": "The Peasants' Revolt",
                "meta": {
                    "type": "articles.ArticlePage",
                    "html_url": "https://cms.example.test/articles/peasants-revolt/",
                    "first_published_at": "2022-05-31T10:01:00Z"
                }
            }]
        }))
        .unwrap();
        assert_eq!(listing.meta.total_count, 42);
        assert_eq!(listing.items[0].meta.kind, "articles.ArticlePage");
    }

    #[test]
    fn test_article_from_parts_merges_detail() {
        let item: PageItem = serde_json::from_value(json!({
            "id": 7,
            "title": "The Peasants' Revolt",
            "meta": {"type": "articles.ArticlePage", "html_url": null}
        }))
        .unwrap();
        let detail: PageDetail = serde_json::from_value(json!({
            "meta": {"search_description": "1381 and all that."},
            "teaser_image_jpg": {"url": "https://cms.example.test/t.jpg", "width": 600}
        }))
        .unwrap();

        let article = Article::from_parts(item.clone(), Some(detail));
        assert_eq!(article.description.as_deref(), Some("1381 and all that."));
        assert!(article.teaser_image.is_some());

        let bare = Article::from_parts(item, None);
        assert_eq!(bare.description, None);
        assert_eq!(bare.teaser_image, None);
    }
}
