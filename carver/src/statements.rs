use crate::int_util::process_uint;
use crate::labels::*;
use crate::source_map::{SourceMap, SourceMapItem};
use crate::*;
use matches::debug_assert_matches;
use std::fmt;
use um::{constants, Instruction, Operator, Platter, RegisterId};
use util::ParseEnumError;

pub type StatementVec<'i> = Vec<Statement<'i>>;

/// Operation named by a scroll statement: a machine operator, or the
/// assembler-only `Data` directive that carves a raw word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mnemonic {
    Operator(Operator),
    Data,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mnemonic::Operator(op) => fmt::Display::fmt(op, f),
            Mnemonic::Data => f.write_str("Data"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Expression<'i> {
    Constant(Platter),
    Label(Span<'i>),
}

#[derive(Debug, PartialEq)]
pub enum Parameter<'i> {
    Register(RegisterId),
    Expression(Expression<'i>),
}

#[derive(Debug, PartialEq)]
pub struct Statement<'i> {
    pub mnemonic: Mnemonic,
    pub parameters: Vec<Parameter<'i>>,
    pub span: Span<'i>,
}

fn process_mnemonic(pair: &Pair<Rule>) -> Result<Mnemonic> {
    let name = pair.as_str();

    if name == "Data" {
        Ok(Mnemonic::Data)
    } else {
        name.parse()
            .map(Mnemonic::Operator)
            .map_err(|err: ParseEnumError| new_parser_error(pair.as_span(), format!("{}", err)))
    }
}

fn process_register(pair: &Pair<Rule>) -> Result<RegisterId> {
    pair.as_str()
        .parse()
        .map_err(|err: ParseEnumError| new_parser_error(pair.as_span(), format!("{}", err)))
}

fn process_expression(pair: Pair<Rule>) -> Result<Expression> {
    let inner = pair.into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::uint => Ok(Expression::Constant(process_uint(inner)?)),
        Rule::char_lit => {
            let ch = inner.into_inner().next().unwrap();
            // The grammar admits exactly one printable ASCII character.
            let value = ch.as_str().chars().next().unwrap() as Platter;
            Ok(Expression::Constant(value))
        }
        Rule::identifier => Ok(Expression::Label(inner.as_span())),
        _ => unreachable!(),
    }
}

fn process_parameter(pair: Pair<Rule>) -> Result<Parameter> {
    let inner = pair.into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::register => Ok(Parameter::Register(process_register(&inner)?)),
        Rule::expression => Ok(Parameter::Expression(process_expression(inner)?)),
        _ => unreachable!(),
    }
}

/// First pass: walks the parsed scroll, collecting statements in order,
/// the label map, and the line each statement came from. A label
/// definition takes the current statement count as its value, so it
/// points at the next statement carved.
pub fn process_program(pair: Pair<Rule>) -> Result<(StatementVec, LabelMap, SourceMap)> {
    debug_assert_matches!(pair.as_rule(), Rule::program);

    let mut statements = Vec::new();
    let mut labels = LabelMap::new();
    let mut source_map = Vec::new();

    for line in pair.into_inner() {
        if line.as_rule() != Rule::line {
            continue;
        }

        let line_number = line.as_span().start_pos().line_col().0 as u32;

        let inner = match line.into_inner().next() {
            Some(inner) => inner,
            None => continue,
        };

        match inner.as_rule() {
            Rule::label_def => {
                let name = inner.into_inner().next().unwrap();
                define_label(&mut labels, name, statements.len() as u32)?;
            }
            Rule::statement => {
                let span = inner.as_span();
                let mut pairs = inner.into_inner();
                let mnemonic = process_mnemonic(&pairs.next().unwrap())?;
                let parameters = pairs.map(process_parameter).collect::<Result<Vec<_>>>()?;

                statements.push(Statement {
                    mnemonic,
                    parameters,
                    span,
                });
                source_map.push(SourceMapItem { line: line_number });
            }
            _ => unreachable!(),
        }
    }

    Ok((statements, labels, source_map))
}

fn check_arity(statement: &Statement, expected: usize) -> Result<()> {
    let found = statement.parameters.len();

    if found == expected {
        Ok(())
    } else {
        Err(new_parser_error(
            statement.span.clone(),
            format!(
                "{} takes {} parameter(s), found {}",
                statement.mnemonic, expected, found
            ),
        ))
    }
}

fn register_parameter(statement: &Statement, index: usize) -> Result<RegisterId> {
    match statement.parameters[index] {
        Parameter::Register(id) => Ok(id),
        Parameter::Expression(_) => Err(new_parser_error(
            statement.span.clone(),
            format!(
                "Parameter {} of {} must be a register",
                index + 1,
                statement.mnemonic
            ),
        )),
    }
}

fn expression_parameter(statement: &Statement, index: usize, labels: &LabelMap) -> Result<Platter> {
    match &statement.parameters[index] {
        Parameter::Expression(expression) => resolve_expression(labels, expression),
        Parameter::Register(_) => Err(new_parser_error(
            statement.span.clone(),
            format!(
                "Parameter {} of {} must be an expression",
                index + 1,
                statement.mnemonic
            ),
        )),
    }
}

fn resolve_expression(labels: &LabelMap, expression: &Expression) -> Result<Platter> {
    match expression {
        Expression::Constant(value) => Ok(*value),
        Expression::Label(span) => labels
            .get(span.as_str())
            .copied()
            .ok_or_else(|| new_parser_error(span.clone(), "Label not found".to_owned())),
    }
}

fn ternary_instruction(op: Operator, a: RegisterId, b: RegisterId, c: RegisterId) -> Instruction {
    match op {
        Operator::CondMove => Instruction::CondMove { a, b, c },
        Operator::Index => Instruction::Index { a, b, c },
        Operator::Amend => Instruction::Amend { a, b, c },
        Operator::Add => Instruction::Add { a, b, c },
        Operator::Mult => Instruction::Mult { a, b, c },
        Operator::Div => Instruction::Div { a, b, c },
        Operator::Nand => Instruction::Nand { a, b, c },
        _ => unreachable!(),
    }
}

fn finalize_statement(labels: &LabelMap, statement: &Statement) -> Result<Platter> {
    let op = match statement.mnemonic {
        Mnemonic::Data => {
            check_arity(statement, 1)?;
            return expression_parameter(statement, 0, labels);
        }
        Mnemonic::Operator(op) => op,
    };

    let instruction = match op {
        Operator::CondMove
        | Operator::Index
        | Operator::Amend
        | Operator::Add
        | Operator::Mult
        | Operator::Div
        | Operator::Nand => {
            check_arity(statement, 3)?;
            ternary_instruction(
                op,
                register_parameter(statement, 0)?,
                register_parameter(statement, 1)?,
                register_parameter(statement, 2)?,
            )
        }

        Operator::Halt => {
            check_arity(statement, 0)?;
            Instruction::Halt
        }

        Operator::Alloc => {
            check_arity(statement, 2)?;
            Instruction::Alloc {
                b: register_parameter(statement, 0)?,
                c: register_parameter(statement, 1)?,
            }
        }

        Operator::Load => {
            check_arity(statement, 2)?;
            Instruction::Load {
                b: register_parameter(statement, 0)?,
                c: register_parameter(statement, 1)?,
            }
        }

        Operator::Abandon => {
            check_arity(statement, 1)?;
            Instruction::Abandon {
                c: register_parameter(statement, 0)?,
            }
        }

        Operator::Output => {
            check_arity(statement, 1)?;
            Instruction::Output {
                c: register_parameter(statement, 0)?,
            }
        }

        Operator::Input => {
            check_arity(statement, 1)?;
            Instruction::Input {
                c: register_parameter(statement, 0)?,
            }
        }

        Operator::Orthography => {
            check_arity(statement, 2)?;
            let a = register_parameter(statement, 0)?;
            let immediate = expression_parameter(statement, 1, labels)?;

            if immediate > constants::IMMEDIATE_MASK {
                return Err(new_parser_error(
                    statement.span.clone(),
                    format!("Immediate {} does not fit in 25 bits", immediate),
                ));
            }

            Instruction::Orthography { a, immediate }
        }
    };

    Ok(instruction.encode())
}

/// Second pass: resolves every expression against the label map, applies
/// the arity and range checks, and encodes each statement as one platter.
pub fn assemble_statements(statements: &[Statement], labels: &LabelMap) -> Result<Vec<Platter>> {
    statements
        .iter()
        .map(|statement| finalize_statement(labels, statement))
        .collect()
}
