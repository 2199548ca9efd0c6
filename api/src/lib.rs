//! Typed client for the Bias Lens backend API. The analysis pipeline itself
//! lives server-side; this crate only knows the record shapes it returns and
//! how to fetch them.

pub mod client;
pub mod error;
pub mod types;

pub use client::{fetch_article, fetch_articles, fetch_narratives};
pub use error::ApiError;
pub use types::{
    ArticleDetail, ArticleSummary, BiasDimension, BiasScores, BiasTimePoint, ClusterArticle,
    Highlight, NarrativeCluster, PrimarySource,
};
