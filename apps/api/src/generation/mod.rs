// Generation pipeline: prompt construction → LLM call → parse-with-fallback
// → persist. All LLM calls go through llm_client — no direct provider calls
// here.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
