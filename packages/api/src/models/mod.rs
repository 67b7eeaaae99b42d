//! Wire models for the backend endpoints.

mod content;
mod kg;
mod search;
mod status;
mod user;

pub use content::{IndexUrlResponse, SubmitStatus, SubmitUrlResponse};
pub use kg::{InterestTerm, KgContext, KgEntity, KgRelationship, KnowledgeGraph};
pub use search::{InstantAnswer, SearchHit, SearchOptions, SearchResponse, WebSources};
pub use status::{CrawlerStats, CrawlerStatus, HealthDependencies, HealthResponse, QueueStats};
pub use user::{AuthResponse, UserInfo};
