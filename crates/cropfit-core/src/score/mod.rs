pub mod engine;
pub mod outcome;
pub mod weights;

pub use engine::{rank, recommend, score_crop, select_recommendations};
pub use outcome::{CropScore, Factor, FactorScore, Recommendation};
