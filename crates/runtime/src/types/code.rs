use crate::{Arity, CallShape, Frame, Ptr, Result, Table, Value};
use std::fmt;

/// The entry point that executes a compiled body
///
/// The runtime doesn't interpret bytecode itself; a compiled function's
/// [Code] carries the function pointer that does, supplied when the code
/// object is built. The executor receives the code object, the call's
/// scope (a fresh table chained to the body's defining scope, with the
/// closure's captures overlaid), and the caller's frame with arguments
/// already conformed to the declared shape. It returns the shape of the
/// results it left in the frame.
pub type ExecFn = fn(&Code, Table, &mut Frame) -> Result<Arity>;

/// An immutable compiled function body
///
/// Shared between every closure instantiated from the same definition; the
/// per-closure state lives in the [Function](crate::Function) that pairs a
/// `Code` with its captured environment. Dropping the last reference to a
/// `Code` releases its constants and nested codes recursively.
pub struct Code {
    shape: CallShape,
    constants: Vec<Value>,
    children: Vec<Ptr<Code>>,
    bytes: Vec<u8>,
    scope: Table,
    exec: ExecFn,
}

impl Code {
    /// Initializes a code object
    ///
    /// `children` holds the codes of nested function definitions, `scope`
    /// is the scope the body was defined in, and `exec` is the interpreter
    /// entry point that will run the instruction bytes.
    pub fn new(
        shape: CallShape,
        constants: Vec<Value>,
        children: Vec<Ptr<Code>>,
        bytes: Vec<u8>,
        scope: Table,
        exec: ExecFn,
    ) -> Self {
        Self {
            shape,
            constants,
            children,
            bytes,
            scope,
            exec,
        }
    }

    /// The argument and return shapes the body was compiled for
    pub fn shape(&self) -> CallShape {
        self.shape
    }

    /// The body's immediate constants
    pub fn constants(&self) -> &[Value] {
        &self.constants
    }

    /// The codes of function definitions nested in the body
    pub fn children(&self) -> &[Ptr<Code>] {
        &self.children
    }

    /// The body's instruction bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The scope the body was defined in
    pub fn scope(&self) -> &Table {
        &self.scope
    }

    /// Runs the body with the given scope and frame
    pub fn exec(&self, scope: Table, frame: &mut Frame) -> Result<Arity> {
        (self.exec)(self, scope, frame)
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Code")
            .field("shape", &self.shape)
            .field("constants", &self.constants.len())
            .field("children", &self.children.len())
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
