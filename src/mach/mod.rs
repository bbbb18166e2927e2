/*!
# Machine Module

The interpreter proper. `Runtime` owns the program store, the
variable table and the program counter; `Console` is the seam
between statement execution and whatever terminal hosts it.

*/

mod console;
mod operation;
mod program;
mod runtime;
mod var;

pub use console::Console;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Runtime;
pub use var::Var;
