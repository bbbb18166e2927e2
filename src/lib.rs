//! # Tiny BASIC
//!
//! A line-numbered BASIC for whole numbers only, the way the first
//! microcomputer dialects worked before floating point fit in memory.
//!
//! Seven statements make up the language:
//!
//! ```text
//! LET name = expression
//! PRINT expression
//! INPUT name
//! GOTO line
//! IF expression op expression THEN line
//! REM anything at all
//! END
//! ```
//!
//! Expressions combine integer literals, variables, parentheses, and
//! `+ - * /` with the usual precedence. `IF` compares with `=`, `>`,
//! or `<`. Lines entered with a leading number are stored in the
//! program; a bare line number deletes that line. `LET`, `PRINT`, and
//! `INPUT` also work without a line number and take effect at once.
//!
//! At the terminal, `LIST` shows the program, `RUN` executes it from
//! the lowest line, `CLEAR` wipes the program and every variable, and
//! `QUIT` leaves.
//!
//! ```text
//! 10 LET X = 1
//! 20 IF X = 1 THEN 40
//! 30 LET X = 2
//! 40 PRINT X
//! RUN
//! 1
//! ```

pub mod lang;
pub mod mach;
