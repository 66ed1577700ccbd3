pub mod ffi;
pub mod format;
pub mod operators;
pub mod pipeline;
pub mod rpn_converter;
pub mod rpn_evaluator;
pub mod tokenizer;

pub use pipeline::{process, CalcError, Evaluation, TraceLine, SAMPLES};
