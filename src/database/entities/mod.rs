pub mod activities;
pub mod annotation_types;
pub mod edges;
pub mod experiment_samples;
pub mod experiments;
pub mod genes;
pub mod ml_models;
pub mod nodes;
pub mod participations;
pub mod sample_annotations;
pub mod samples;
