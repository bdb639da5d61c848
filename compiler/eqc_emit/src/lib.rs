//! EQC Emit - turning synthesized method bodies into host syntax.
//!
//! Synthesis produces abstract ops. A host maps them onto its own tree by
//! implementing [`MethodEmitter`]; [`emit_methods`] drives any implementation
//! in emission order.
//!
//! [`JavaPrinter`] is the reference implementation. It renders Java source
//! text through an [`Emitter`] sink and is what [`render_java`] uses.

mod driver;
mod emitter;
mod java;

pub use driver::{emit_method, emit_methods, MethodEmitter};
pub use emitter::{Emitter, StringEmitter};
pub use java::{render_java, JavaPrinter};
