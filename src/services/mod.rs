pub mod llm;
pub mod youtube;
