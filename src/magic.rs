use crate::solution::CapacityExceeded;

/** a filled n x n board holding the values 1..n² */
pub type Board = Vec<Vec<usize>>;

/** enumerates every n x n magic square by brute-force backtracking.
Cells are filled row-major with the unused values 1..n²; a branch is pruned
as soon as a completed row, column or diagonal misses the magic constant
n(n²+1)/2. No domain propagation here: this is the all-permutations
counterpart of the coloring strategies, kept as a standalone demo problem.
Fails with `CapacityExceeded` when more than `max_squares` boards are found. */
pub fn enumerate(n: usize, max_squares: usize) -> Result<Vec<Board>, CapacityExceeded> {
    let mut search = Search {
        n,
        magic_constant: n * (n * n + 1) / 2,
        board: vec![vec![0; n]; n], // 0 marks an empty cell
        used: vec![false; n * n],
        found: Vec::new(),
        capacity: max_squares,
    };
    search.explore(0, 0)?;
    Ok(search.found)
}

struct Search {
    n: usize,
    magic_constant: usize,
    board: Vec<Vec<usize>>,
    /// used[v-1]: value v is already placed on the board
    used: Vec<bool>,
    found: Vec<Board>,
    capacity: usize,
}

impl Search {

    fn explore(&mut self, row: usize, col: usize) -> Result<(), CapacityExceeded> {
        if row == self.n { // board fully filled, every line already checked
            if self.found.len() == self.capacity {
                return Err(CapacityExceeded { capacity: self.capacity });
            }
            self.found.push(self.board.clone());
            return Ok(());
        }
        for value in 1..=(self.n * self.n) {
            if self.used[value - 1] {
                continue;
            }
            self.board[row][col] = value;
            self.used[value - 1] = true;
            if self.completed_lines_ok(row, col) {
                let (next_row, next_col) = if col + 1 == self.n {
                    (row + 1, 0)
                } else {
                    (row, col + 1)
                };
                self.explore(next_row, next_col)?;
            }
            self.board[row][col] = 0;
            self.used[value - 1] = false;
        }
        Ok(())
    }

    /** checks the sums of the lines completed by the cell (row,col):
    its row once the last column is reached, its column once the last row is
    reached, and the two diagonals once their bottom cell is placed. */
    fn completed_lines_ok(&self, row: usize, col: usize) -> bool {
        let last = self.n - 1;
        if col == last && self.row_sum(row) != self.magic_constant {
            return false;
        }
        if row == last {
            if self.column_sum(col) != self.magic_constant {
                return false;
            }
            if col == last && self.diagonal_sum() != self.magic_constant {
                return false;
            }
            if col == 0 && self.anti_diagonal_sum() != self.magic_constant {
                return false;
            }
        }
        true
    }

    fn row_sum(&self, row: usize) -> usize {
        self.board[row].iter().sum()
    }

    fn column_sum(&self, col: usize) -> usize {
        (0..self.n).map(|row| self.board[row][col]).sum()
    }

    fn diagonal_sum(&self) -> usize {
        (0..self.n).map(|i| self.board[i][i]).sum()
    }

    fn anti_diagonal_sum(&self) -> usize {
        (0..self.n).map(|i| self.board[self.n - 1 - i][i]).sum()
    }
}
