pub mod assemble;
pub mod cache;
pub mod extract;
pub mod overrides;
pub mod pipeline;
pub mod preprocess;
pub mod prompt;
pub mod sanitize;
pub mod section;

pub use assemble::{assemble, parse_response};
pub use cache::{CacheKey, ExplanationCache};
pub use extract::extract;
pub use overrides::{NoOverrides, OverrideTable, Overrides, PatchFn};
pub use pipeline::ExplanationPipeline;
pub use prompt::PromptBuilder;
pub use sanitize::clean;
pub use section::{SectionKey, SectionMap};
