//! EQC Eval - reference evaluator for synthesized equality methods.
//!
//! Runs [`GeneratedMethods`](eqc_ir::GeneratedMethods) against concrete
//! object graphs so the equality contract of generated code can be checked
//! without a host compiler:
//!
//! - reflexive, symmetric and transitive `equals`
//! - equal objects have equal `hashCode`
//! - subclasses that add state never equal their superclass instances
//!
//! Numeric and string semantics ([`platform`]) are bit-exact with the
//! runtime library the generated bodies call.

mod error;
mod interpreter;
pub mod platform;
mod table;
mod value;

pub use error::{EvalError, EvalResult};
pub use interpreter::Interpreter;
pub use table::{ClassEntry, ClassTable};
pub use value::{ArrayValue, Object, Value};
