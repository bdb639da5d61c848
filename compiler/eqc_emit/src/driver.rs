//! The host-facing method-building interface.

use eqc_ir::{CanEqualBody, EqualsOp, GeneratedMethod, GeneratedMethods, HashOp, MethodBody};

/// Builds one host method at a time from synthesized ops.
///
/// Calls arrive as `begin_method`, then the body's ops in order (or a single
/// `can_equal` call), then `end_method`.
pub trait MethodEmitter {
    fn begin_method(&mut self, method: &GeneratedMethod);

    fn equals_op(&mut self, op: &EqualsOp);

    fn hash_op(&mut self, op: &HashOp);

    fn can_equal(&mut self, body: &CanEqualBody);

    fn end_method(&mut self, method: &GeneratedMethod);
}

/// Feed one method to `target`.
pub fn emit_method<M: MethodEmitter + ?Sized>(method: &GeneratedMethod, target: &mut M) {
    target.begin_method(method);
    match &method.body {
        MethodBody::Equals(ops) => {
            for op in ops {
                target.equals_op(op);
            }
        }
        MethodBody::HashCode(ops) => {
            for op in ops {
                target.hash_op(op);
            }
        }
        MethodBody::CanEqual(body) => target.can_equal(body),
    }
    target.end_method(method);
}

/// Feed all methods to `target` in emission order.
pub fn emit_methods<M: MethodEmitter + ?Sized>(methods: &GeneratedMethods, target: &mut M) {
    for method in methods.iter() {
        emit_method(method, target);
    }
}
