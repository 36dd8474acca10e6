// Résumé parsing: pattern library, field extractors, profile assembly,
// ATS scoring, and the pipeline that sequences them.
// Apart from `handlers` and the LLM recognizer, nothing here does I/O.

pub mod ats;
pub mod contact;
pub mod handlers;
pub mod name;
pub mod ner;
pub mod patterns;
pub mod pipeline;
pub mod profile;
pub mod sections;
pub mod skills;
