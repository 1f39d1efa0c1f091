//! Tree-walking evaluator module.
//!
//! This module executes the resolved statement tree produced by the type
//! checker. It maintains:
//!
//! - An operand stack for transient intermediate values
//! - A variable stack holding one slot per live binding
//! - A frame stack recording block boundaries for scope release
//!
//! Runtime values are move-only; reading a variable deep-clones its slot
//! so later reads still see the binding.

pub mod interpreter;
pub mod value;
