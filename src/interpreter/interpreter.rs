//! Evaluator implementation.
//!
//! The evaluator walks the resolved statement tree for effects. Every
//! expression leaves exactly one value on the operand stack; statements
//! consume it. Entering a block records the variable-stack top as a new
//! frame base, and leaving it releases every slot allocated since, in
//! LIFO order, mirroring the type checker's scope discipline exactly.

use std::io::Write;
use std::mem;

use crate::{
    errors::errors::RuntimeError,
    type_checker::typed_ast::{TypedExpr, TypedStmt},
};

use super::value::Value;

/// Capacity of the operand and variable stacks.
pub const MAX_STACK: usize = 1000;

/// Tree-walking evaluator.
///
/// Holds the operand stack for transient values, the variable stack with
/// one slot per live binding, the frame-base stack for block scoping,
/// and the sink that bound values are printed to.
pub struct Evaluator<W: Write> {
    temps: Vec<Value>,
    variables: Vec<Value>,
    frames: Vec<usize>,
    out: W,
}

impl<W: Write> Evaluator<W> {
    /// Creates an evaluator writing bound values to `out`.
    pub fn new(out: W) -> Self {
        Evaluator {
            temps: Vec::new(),
            variables: Vec::new(),
            frames: Vec::new(),
            out,
        }
    }

    fn push(&mut self, value: Value) -> Result<(), RuntimeError> {
        if self.temps.len() == MAX_STACK {
            return Err(RuntimeError::StackOverflow);
        }
        self.temps.push(value);
        Ok(())
    }

    fn pop(&mut self) -> Result<Value, RuntimeError> {
        self.temps.pop().ok_or(RuntimeError::StackUnderflow)
    }

    fn push_variable(&mut self, value: Value) -> Result<(), RuntimeError> {
        if self.variables.len() == MAX_STACK {
            return Err(RuntimeError::StackOverflow);
        }
        self.variables.push(value);
        Ok(())
    }

    fn push_frame(&mut self) {
        self.frames.push(self.variables.len());
    }

    fn pop_frame(&mut self) {
        if let Some(base) = self.frames.pop() {
            self.variables.truncate(base);
        }
    }

    /// The number of variable slots currently live.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// The value bound at `slot`, if live.
    pub fn variable(&self, slot: usize) -> Option<&Value> {
        self.variables.get(slot)
    }

    /// The output sink.
    pub fn out(&self) -> &W {
        &self.out
    }

    /// Evaluates an expression, leaving its value on the operand stack.
    pub fn eval(&mut self, expr: &TypedExpr) -> Result<(), RuntimeError> {
        match expr {
            TypedExpr::Int(value) => self.push(Value::Int(*value)),
            TypedExpr::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    self.eval(item)?;
                    values.push(self.pop()?);
                }
                self.push(Value::Array(values))
            }
            TypedExpr::Var { slot, .. } => {
                // A read must not move the binding out of its slot, so
                // the slot is cloned rather than taken.
                let value = self
                    .variables
                    .get(*slot)
                    .ok_or(RuntimeError::InvalidSlot { slot: *slot })?
                    .deep_clone();
                self.push(value)
            }
            TypedExpr::Add(lhs, rhs) => {
                self.eval(lhs)?;
                self.eval(rhs)?;
                let rhs = self.pop()?;
                let lhs = self.pop()?;
                let (Value::Int(lhs), Value::Int(rhs)) = (lhs, rhs) else {
                    return Err(RuntimeError::NonIntegerOperand);
                };
                self.push(Value::Int(lhs.wrapping_add(rhs)))
            }
        }
    }

    /// Executes a statement for effects.
    ///
    /// Each declaration prints its computed value on one line and then
    /// binds it as a new variable slot. A block executes its members in
    /// sequence inside a fresh frame.
    pub fn exec(&mut self, stmt: &TypedStmt) -> Result<(), RuntimeError> {
        match stmt {
            TypedStmt::Let { init, .. } => {
                self.eval(init)?;
                let value = self.pop()?;
                writeln!(self.out, "{}", value)?;
                self.push_variable(value)
            }
            TypedStmt::Block(items) => {
                self.push_frame();
                let result = items.iter().try_for_each(|item| self.exec(item));
                self.pop_frame();
                result
            }
        }
    }

    /// Moves the value out of a variable slot, leaving the slot in its
    /// valid-but-empty state (integer zero).
    pub fn take_variable(&mut self, slot: usize) -> Result<Value, RuntimeError> {
        let slot_ref = self
            .variables
            .get_mut(slot)
            .ok_or(RuntimeError::InvalidSlot { slot })?;
        Ok(mem::take(slot_ref))
    }
}
