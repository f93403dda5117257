// Repair candidate generation for a token that failed membership.
//
// Architecture:
//   - `generators`: individual edit-operation generators (CandidateGenerator trait)
//   - `candidates`: per-call deduplicated candidate set
//   - `strategy`: composes generators into one candidate pass
//   - `scoring`: edit-distance scoring with the common-word bias, ranking

pub mod candidates;
pub mod generators;
pub mod scoring;
pub mod strategy;

pub use candidates::CandidateSet;
pub use generators::CandidateGenerator;
pub use scoring::{Suggestion, sort_suggestions};
pub use strategy::{CorrectionStrategy, default_strategy, single_edit_strategy};
