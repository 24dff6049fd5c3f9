//! Algorithm implementations for child growth assessment
//!
//! This module contains the growth-standard classification engine: age and
//! BMI calculation, threshold classification, status aggregation and the
//! evaluator that composes them.

pub mod growth;
