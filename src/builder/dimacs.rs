use std::io::BufRead;

use crate::{
    formula::Formula,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// The contents of a DIMACS file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dimacs {
    /// The larger of the atom count given on the problem line and the largest atom of any clause.
    pub atoms: Atom,

    /// Clauses, in the order read.
    pub clauses: Vec<CClause>,

    /// Comment lines, without the leading `c`.
    pub comments: Vec<String>,
}

impl Dimacs {
    /// A formula of the clauses read.
    pub fn into_formula(self) -> Result<Formula, ErrorKind> {
        Formula::new(self.clauses, self.atoms)
    }
}

/// Reads a formula in DIMACS form.
///
/// - Lines starting with `c` are comments.
/// - The problem line `p cnf <atoms> <clauses>` is optional, though if present the counts must parse.
/// - Each clause is terminated by `0`, and a clause may span several lines.
/// - A line starting with `%` ends the formula.
///
/// ```rust
/// # use sudoku_dpll::builder::read_dimacs;
/// let dimacs = read_dimacs("c rules\np cnf 3 2\n1 -2 0\n2\n3 0\n%\n0\n".as_bytes()).unwrap();
/// assert_eq!(dimacs.atoms, 3);
/// assert_eq!(dimacs.clauses, vec![vec![1, -2], vec![2, 3]]);
/// assert_eq!(dimacs.comments, vec!["rules"]);
/// ```
pub fn read_dimacs(mut reader: impl BufRead) -> Result<Dimacs, ErrorKind> {
    let mut dimacs = Dimacs::default();
    let mut buffer = String::with_capacity(1024);
    let mut clause_buffer: CClause = Vec::default();

    let mut line_counter = 0;

    'formula_loop: loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(_) => return Err(err::ParseError::Line(line_counter).into()),
        }

        let line = buffer.trim();
        match line.chars().next() {
            None => {}

            Some('%') => break 'formula_loop,

            Some('c') => dimacs.comments.push(line[1..].trim().to_string()),

            Some('p') => {
                let mut problem_details = line.split_whitespace();
                let atom_count = match problem_details.nth(2).map(|count| count.parse::<Atom>()) {
                    Some(Ok(count)) if count <= ATOM_MAX => count,
                    _ => return Err(err::ParseError::ProblemSpecification.into()),
                };
                match problem_details.next().map(|count| count.parse::<usize>()) {
                    Some(Ok(clause_count)) => {
                        log::debug!(target: targets::BUILDER, "Expecting {atom_count} atoms and {clause_count} clauses");
                    }
                    _ => return Err(err::ParseError::ProblemSpecification.into()),
                }
                dimacs.atoms = std::cmp::max(dimacs.atoms, atom_count);
            }

            _ => {
                for item in line.split_whitespace() {
                    match item.parse::<CLiteral>() {
                        Ok(0) => dimacs.clauses.push(std::mem::take(&mut clause_buffer)),

                        Ok(literal) if literal.atom() <= ATOM_MAX => {
                            dimacs.atoms = std::cmp::max(dimacs.atoms, literal.atom());
                            clause_buffer.push(literal);
                        }

                        _ => return Err(err::ParseError::Literal(line_counter).into()),
                    }
                }
            }
        }
    }

    if !clause_buffer.is_empty() {
        return Err(err::ParseError::MissingTerminator.into());
    }

    log::info!(target: targets::BUILDER, "Read {} clauses over at most {} atoms", dimacs.clauses.len(), dimacs.atoms);
    Ok(dimacs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_line_bounds_atoms() {
        let dimacs = read_dimacs("p cnf 729 2\n111 112 0\n-111 -112 0\n".as_bytes()).unwrap();
        assert_eq!(dimacs.atoms, 729);

        let dimacs = read_dimacs("p cnf 2 1\n999 0\n".as_bytes()).unwrap();
        assert_eq!(dimacs.atoms, 999);
    }

    #[test]
    fn malformed() {
        assert_eq!(
            read_dimacs("p cnf x 2\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );
        assert_eq!(
            read_dimacs("p cnf 2\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );
        assert_eq!(
            read_dimacs("1 2 0\n\n3 q 0\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::Literal(3)))
        );
        assert_eq!(
            read_dimacs("1 2 0\n3".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::MissingTerminator))
        );
    }

    #[test]
    fn oversized_problem_line() {
        assert_eq!(
            read_dimacs("p cnf 4000000000 1\n1 0\n".as_bytes()),
            Err(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );

        let dimacs = read_dimacs(format!("p cnf {ATOM_MAX} 1\n1 -2 0\n").as_bytes()).unwrap();
        assert_eq!(dimacs.atoms, ATOM_MAX);
        let formula = dimacs.into_formula().unwrap();
        assert_eq!(formula.atom_bound(), 2);
    }

    #[test]
    fn empty_clause_rejected_on_build() {
        let dimacs = read_dimacs("1 0\n0\n".as_bytes()).unwrap();
        assert_eq!(dimacs.clauses.len(), 2);
        assert_eq!(
            dimacs.into_formula().err(),
            Some(ErrorKind::Build(err::BuildError::EmptyClause))
        );
    }
}
