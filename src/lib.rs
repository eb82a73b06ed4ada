//! zcalc - a calculator expression evaluator.
//!
//! The engine lives in [`calculator`]: [`calculator::evaluate`] turns a typed
//! infix string such as `200+10%` or `2(3+√16)` into a number or a typed
//! [`calculator::EvaluationError`]. [`session`] and [`config`] build a small
//! calculator front-end on top of it.

pub mod calculator;
pub mod config;
pub mod session;
