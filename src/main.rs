//! # Tiny BASIC
//!
//! The terminal build of the Tiny BASIC interpreter.

mod term;

fn main() {
    term::main()
}
