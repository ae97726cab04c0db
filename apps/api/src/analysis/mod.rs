// Resume / job-description keyword analysis.
//
// The pipeline runs entirely in process: normalization, rule-based
// linguistic analysis, keyword extraction, match scoring, and suggestion
// generation. Handlers stay thin; behavior lives in the submodules and is
// unit-tested there.

pub mod engine;
pub mod extractor;
pub mod handlers;
pub mod lexicon;
pub mod linguistics;
pub mod normalize;
pub mod scorer;
pub mod suggestions;
pub mod vocab;
