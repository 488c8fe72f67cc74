//! FitPlan Library
//!
//! Vegetarian meal and workout plan generation over a curated catalog.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod db;
pub mod mcp;
pub mod models;
pub mod planner;
pub mod tools;
