// Resume export: ResumeRecord → LaTeX source → PDF bytes.
// Flow: escape (leaf values) → template → compiler.

pub mod compiler;
pub mod escape;
pub mod handlers;
pub mod placeholders;
pub mod template;
