//! Interview plan generation

pub mod questions;
pub mod recommender;

pub use recommender::{
    InterviewFormat, InterviewPlan, InterviewRecommender, Priority, PriorityRecommendation,
};
