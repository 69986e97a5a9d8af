//! The 4×4 AES state matrix.

use crate::block::{Block, BLOCK_SIZE};

/// One block laid out as a 4×4 matrix of bytes, stored row by row.
///
/// Input bytes fill the matrix column-major: byte `i` lands at row `i % 4`,
/// column `i / 4`, as in FIPS-197 section 3.4.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    rows: [[u8; 4]; 4],
}

impl State {
    /// Loads a block into a state matrix.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (i, &byte) in block.iter().enumerate() {
            rows[i % 4][i / 4] = byte;
        }
        Self { rows }
    }

    /// Serialises the matrix back into block order.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_SIZE];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.rows[i % 4][i / 4];
        }
        block
    }

    /// Returns the byte at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// Mutable access to every byte of the matrix.
    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> impl Iterator<Item = &mut u8> {
        self.rows.iter_mut().flatten()
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u8; 4] {
        &mut self.rows[row]
    }

    #[inline]
    pub(crate) fn column(&self, col: usize) -> [u8; 4] {
        [
            self.rows[0][col],
            self.rows[1][col],
            self.rows[2][col],
            self.rows[3][col],
        ]
    }

    #[inline]
    pub(crate) fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.rows[row][col] = byte;
        }
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}
