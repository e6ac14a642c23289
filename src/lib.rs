pub mod core;

pub use crate::core::algebra::{
    AlgebraError, AlgebraGraph, GraphSnapshot, PathAlgebra,
    PropagationEvent, PropagationReport,
};
