use crate::{
    structures::valuation::Valuation,
    sudoku::{box_size, encode},
};

/// A grid of digits, by row, with `0` for a cell without a value.
pub type Grid = Vec<Vec<usize>>;

/// The grid of a valuation.
///
/// The digit of a cell is the least value whose atom is true, if any.
pub fn grid_from_valuation(valuation: &impl Valuation, size: usize) -> Grid {
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    (1..=size)
                        .find(|value| valuation.value_of(encode(row, col, *value)) == Some(true))
                        .unwrap_or(0)
                })
                .collect()
        })
        .collect()
}

/// Whether each row, column, and box of a grid holds each digit exactly once.
pub fn validate_grid(grid: &Grid) -> bool {
    let size = grid.len();
    let Ok(box_size) = box_size(size) else {
        return false;
    };
    if grid.iter().any(|row| row.len() != size) {
        return false;
    }

    (0..size).all(|index| {
        let (box_row, box_col) = (box_size * (index / box_size), box_size * (index % box_size));
        is_permutation(grid[index].iter().copied(), size)
            && is_permutation(grid.iter().map(|row| row[index]), size)
            && is_permutation(
                (0..size).map(|cell| grid[box_row + cell / box_size][box_col + cell % box_size]),
                size,
            )
    })
}

/// Whether `cells` holds each digit from 1 to `size` exactly once.
fn is_permutation(cells: impl Iterator<Item = usize>, size: usize) -> bool {
    let mut seen = vec![false; size + 1];
    for digit in cells {
        if digit == 0 || digit > size || seen[digit] {
            return false;
        }
        seen[digit] = true;
    }
    seen.iter().skip(1).all(|present| *present)
}

/// A grid as text, with boxes separated and `.` for a cell without a value.
///
/// ```rust
/// # use sudoku_dpll::sudoku::render_grid;
/// let grid = vec![vec![1, 2, 3, 4], vec![3, 4, 1, 2], vec![2, 1, 4, 3], vec![4, 3, 0, 1]];
/// assert_eq!(
///     render_grid(&grid),
///     "1 2 | 3 4\n3 4 | 1 2\n----+----\n2 1 | 4 3\n4 3 | . 1\n"
/// );
/// ```
pub fn render_grid(grid: &Grid) -> String {
    let box_size = box_size(grid.len()).unwrap_or(grid.len().max(1));

    let rows = grid
        .iter()
        .map(|row| {
            row.chunks(box_size)
                .map(|chunk| {
                    chunk
                        .iter()
                        .map(|digit| match digit {
                            0 => ".".to_string(),
                            _ => digit.to_string(),
                        })
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>();

    let separator = rows
        .first()
        .map(|row| {
            row.chars()
                .map(|c| match c {
                    '|' => '+',
                    _ => '-',
                })
                .collect::<String>()
        })
        .unwrap_or_default();

    let mut the_string = String::default();
    for (index, row) in rows.iter().enumerate() {
        if index > 0 && index % box_size == 0 {
            the_string.push_str(&separator);
            the_string.push('\n');
        }
        the_string.push_str(row);
        the_string.push('\n');
    }
    the_string
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        let mut grid = vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 1],
        ];
        assert!(validate_grid(&grid));

        // Rows and columns hold, though the first box does not.
        let shifted = vec![
            vec![1, 2, 3, 4],
            vec![2, 3, 4, 1],
            vec![3, 4, 1, 2],
            vec![4, 1, 2, 3],
        ];
        assert!(!validate_grid(&shifted));

        grid[3][3] = 0;
        assert!(!validate_grid(&grid));
        assert!(!validate_grid(&vec![vec![1]]));
    }

    #[test]
    fn grid_of_valuation() {
        let mut valuation = vec![None; 445];
        valuation[encode(0, 0, 3) as usize] = Some(true);
        valuation[encode(0, 1, 2) as usize] = Some(false);
        valuation[encode(3, 3, 4) as usize] = Some(true);

        let grid = grid_from_valuation(&valuation, 4);
        assert_eq!(grid[0], vec![3, 0, 0, 0]);
        assert_eq!(grid[3], vec![0, 0, 0, 4]);
    }
}
