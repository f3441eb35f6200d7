pub mod pipeline;
pub mod section_classifier;

pub use pipeline::AnalysisPipeline;
pub use section_classifier::SectionClassifier;
