pub mod cache;
pub mod category;
pub mod error;
pub mod mock;
pub mod normalize;
pub mod slug;
pub mod source;
pub mod types;

pub use cache::{ArticleCache, CURRENT_ARTICLES_SLOT};
pub use category::Category;
pub use error::{Error, Result};
pub use source::{HeadlinesQuery, NewsSource, SearchQuery, DEFAULT_PAGE_SIZE};
pub use types::{Article, ArticleSource, RawArticle};

pub mod prelude {
    pub use crate::{Article, ArticleCache, Category, Error, NewsSource, RawArticle, Result};
}
