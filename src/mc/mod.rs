pub mod estimators;
pub mod payoffs;
