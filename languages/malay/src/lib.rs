pub mod overrides;
pub mod service;
pub mod translator;

pub use overrides::MalayOverrides;
pub use service::DictionaryService;
pub use translator::{LibreTranslator, PhrasebookTranslator};
