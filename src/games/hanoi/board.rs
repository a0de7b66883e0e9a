//! Mutable board state for the Tower of Hanoi.

use super::action::{Move, MoveError};
use super::peg::Peg;
use rand::RngExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A disk, identified by its size (0 = smallest).
///
/// Disk identity is its size; no two disks on a board share one.
pub type Disk = usize;

/// Errors raised when constructing or querying a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The requested disk count was zero.
    #[display("must use at least one disk")]
    NoDisks,

    /// A peg stacks a larger disk on top of a smaller one.
    #[display("Invalid peg {}: cannot stack large disks on small ones", _0)]
    MisorderedPeg(Peg),

    /// The same disk size appears more than once across the pegs.
    #[display("duplicate disk found: {}", _0)]
    DuplicateDisk(Disk),

    /// A disk size falls outside `0..count`, leaving a gap in the sequence.
    #[display("disk {} is out of range for a board of {} disks", disk, count)]
    DiskOutOfRange {
        /// The offending disk size.
        disk: Disk,
        /// Total number of disks on the board.
        count: usize,
    },

    /// No peg holds a disk of the given size.
    #[display("there is no disk with size {}", _0)]
    DiskNotFound(Disk),
}

impl std::error::Error for BoardError {}

/// A mutable Tower of Hanoi position: three pegs of disk stacks.
///
/// Each peg is ordered from bottom (first) to top (last). Two
/// invariants hold for every `Board` that exists:
///
/// - within each peg, disk sizes strictly decrease from bottom to top;
/// - across all pegs, each size in `0..disk_count()` appears exactly once.
///
/// Every constructor validates both, including deserialization, and
/// [`Board::make_move`] is the only mutation, so no code path can
/// observe an invalid board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    pegs: [Vec<Disk>; 3],
}

impl Board {
    /// Creates a board with all `count` disks stacked on peg A,
    /// largest at the bottom.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoDisks`] for a zero disk count.
    #[instrument]
    pub fn with_size(count: usize) -> Result<Self, BoardError> {
        if count == 0 {
            return Err(BoardError::NoDisks);
        }
        let peg_a: Vec<Disk> = (0..count).rev().collect();
        Ok(Self {
            pegs: [peg_a, Vec::new(), Vec::new()],
        })
    }

    /// Creates a board with `count` disks distributed randomly over
    /// the three pegs.
    ///
    /// Disks are placed from largest to smallest, each drawing its peg
    /// uniformly, so every stack comes out ordered without a
    /// re-validation pass.
    #[instrument]
    pub fn random_with_size(count: usize) -> Result<Self, BoardError> {
        Self::random_with_size_using(count, &mut rand::rng())
    }

    /// Like [`Board::random_with_size`], drawing pegs from the given
    /// generator.
    pub fn random_with_size_using<R: RngExt>(
        count: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        if count == 0 {
            return Err(BoardError::NoDisks);
        }
        let mut pegs: [Vec<Disk>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        for disk in (0..count).rev() {
            let peg = rng.random_range(0..pegs.len());
            pegs[peg].push(disk);
        }
        debug!(count, "Distributed disks randomly");
        Ok(Self { pegs })
    }

    /// Creates a board from three explicit bottom-to-top peg stacks.
    ///
    /// # Errors
    ///
    /// Rejects a peg whose sizes do not strictly decrease
    /// ([`BoardError::MisorderedPeg`]), a size appearing twice
    /// ([`BoardError::DuplicateDisk`]), or a size outside `0..count`
    /// ([`BoardError::DiskOutOfRange`]). No partial board is returned.
    pub fn from_pegs(pegs: [Vec<Disk>; 3]) -> Result<Self, BoardError> {
        Self::validate(&pegs)?;
        Ok(Self { pegs })
    }

    fn validate(pegs: &[Vec<Disk>; 3]) -> Result<(), BoardError> {
        for (peg, stack) in Peg::ALL.into_iter().zip(pegs.iter()) {
            if stack.windows(2).any(|pair| pair[0] <= pair[1]) {
                return Err(BoardError::MisorderedPeg(peg));
            }
        }

        let count = pegs.iter().map(Vec::len).sum();
        let mut seen = vec![false; count];
        for &disk in pegs.iter().flatten() {
            if disk >= count {
                return Err(BoardError::DiskOutOfRange { disk, count });
            }
            if seen[disk] {
                return Err(BoardError::DuplicateDisk(disk));
            }
            seen[disk] = true;
        }
        Ok(())
    }

    /// Returns true once every disk has reached peg C.
    pub fn is_solved(&self) -> bool {
        self.pegs[0].is_empty() && self.pegs[1].is_empty()
    }

    /// Returns the total number of disks on the board.
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }

    /// Returns the bottom-to-top disk stack of a peg.
    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.to_index()]
    }

    /// Returns the peg currently holding the disk of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DiskNotFound`] if no peg contains it.
    pub fn peg_of_disk(&self, disk: Disk) -> Result<Peg, BoardError> {
        Peg::ALL
            .into_iter()
            .find(|peg| self.pegs[peg.to_index()].contains(&disk))
            .ok_or(BoardError::DiskNotFound(disk))
    }

    /// Applies a move, transferring the top disk of the source peg to
    /// the destination peg. This is the only state transition the
    /// board supports; all gameplay is a sequence of these calls.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::EmptyPeg`] if the source holds no disks,
    /// or [`MoveError::LargerOnSmaller`] if the destination's top disk
    /// is smaller than the one being moved. A rejected move leaves the
    /// board untouched.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let disk = *self.pegs[mv.from_peg().to_index()]
            .last()
            .ok_or(MoveError::EmptyPeg(mv.from_peg()))?;

        if let Some(&onto) = self.pegs[mv.to_peg().to_index()].last()
            && onto < disk
        {
            return Err(MoveError::LargerOnSmaller { disk, onto });
        }

        self.pegs[mv.from_peg().to_index()].pop();
        self.pegs[mv.to_peg().to_index()].push(disk);
        debug!(%mv, disk, "Moved disk");
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A:{:?}, B:{:?}, C:{:?}",
            self.pegs[0], self.pegs[1], self.pegs[2]
        )
    }
}

/// Wire shape of a board: three bottom-to-top stacks.
///
/// Kept separate from [`Board`] so deserialization funnels through
/// [`Board::from_pegs`] and cannot produce an invalid position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBoard {
    peg_a: Vec<Disk>,
    peg_b: Vec<Disk>,
    peg_c: Vec<Disk>,
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        let [peg_a, peg_b, peg_c] = board.pegs;
        Self { peg_a, peg_b, peg_c }
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Self::from_pegs([raw.peg_a, raw.peg_b, raw.peg_c])
    }
}
