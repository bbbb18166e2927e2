//! Syntax tree for one line of BASIC.

use super::token::Operator;
use super::Column;
use std::rc::Rc;

/// A single parsed statement. The column always covers the
/// reserved word that introduced it.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Let(Column, Rc<str>, Expression),
    Print(Column, Expression),
    Input(Column, Rc<str>),
    Goto(Column, i32),
    If(Column, Expression, Operator, Expression, i32),
    Rem(Column, String),
    End(Column),
}

impl Statement {
    pub fn column(&self) -> Column {
        match self {
            Statement::Let(column, ..) => column.clone(),
            Statement::Print(column, ..) => column.clone(),
            Statement::Input(column, ..) => column.clone(),
            Statement::Goto(column, ..) => column.clone(),
            Statement::If(column, ..) => column.clone(),
            Statement::Rem(column, ..) => column.clone(),
            Statement::End(column, ..) => column.clone(),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(Column, i32),
    Var(Column, Rc<str>),
    Binary(Column, Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn column(&self) -> Column {
        match self {
            Expression::Integer(column, ..) => column.clone(),
            Expression::Var(column, ..) => column.clone(),
            Expression::Binary(column, ..) => column.clone(),
        }
    }
}
