//! 人设适配器

mod file_persona_source;

pub use file_persona_source::FilePersonaSource;
