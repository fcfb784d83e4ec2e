//! Data models for folio.
//!
//! - [`Article`]: one record of the generated index
//! - [`ArticleContent`]: an article with its markdown body
//! - [`TagCount`], [`CategoryCount`], [`YearGroup`], [`Adjacent`]: derived query views

mod article;
mod types;

pub use article::{Article, ArticleContent};
pub use types::{Adjacent, CategoryCount, TagCount, YearGroup};
