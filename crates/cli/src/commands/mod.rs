pub mod optimal;
pub mod valuations;
