use std::{collections::HashSet, sync::Arc};

use wordtiles_core::{
    Cell, GridCoord, OverlapGrid, Piece, PieceId, Point,
    geometry::{clamp_group_to_board, snap_to_cell},
    piece::get_piece_by_id,
};

use crate::{
    Action, BoardLetters, Destination, DragPhase, DragState, GameError, NeverSolved, PointerId,
    Region, RejectReason, SolutionPredicate, Surface,
    group::{GroupBounds, group_extent, touching_cluster, translate_group},
    solve,
};

/// Snapshot of the puzzle exposed to rendering after each action.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pieces: Vec<Piece>,
    grid_size: usize,
    drag_state: Option<DragState>,
    game_is_solved: bool,
    all_pieces_are_used: bool,
}

impl GameState {
    /// All pieces in their original order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Looks up a piece.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        get_piece_by_id(&self.pieces, id)
    }

    /// Side length of the board.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// The active drag, if any.
    #[must_use]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag_state.as_ref()
    }

    /// The current drag phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.drag_state
            .as_ref()
            .map_or(DragPhase::Idle, DragState::phase)
    }

    /// Every piece is placed and the layout is an accepted solution.
    #[must_use]
    pub fn game_is_solved(&self) -> bool {
        self.game_is_solved
    }

    /// Every piece is on the board. The pool is empty from then on.
    #[must_use]
    pub fn all_pieces_are_used(&self) -> bool {
        self.all_pieces_are_used
    }

    /// Recomputes the occupancy counts from the current positions.
    #[must_use]
    pub fn overlap_grid(&self) -> OverlapGrid {
        OverlapGrid::compute(&self.pieces, self.grid_size)
    }

    /// Collects the letters currently on the board.
    #[must_use]
    pub fn board_letters(&self) -> BoardLetters {
        BoardLetters::collect(&self.pieces, self.grid_size)
    }

    /// Pieces still in the pool.
    pub fn pool_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|piece| !piece.is_placed())
    }

    fn piece_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|piece| piece.id() == id)
    }
}

/// What an accepted action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Transition {
    /// A drag began.
    Started,
    /// The pointer moved and the destination was recomputed.
    Moved,
    /// The drag grew into a group shift.
    Grouped {
        /// Number of pieces in the group.
        size: usize,
    },
    /// The drag ended.
    Committed(Commit),
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Commit {
    /// The pieces were placed at the destination.
    Placed,
    /// Nothing moved; pieces keep their pre-drag positions.
    Reverted(RevertReason),
}

/// Why a release left the pieces where they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RevertReason {
    /// Dropped over the pool or outside any target.
    #[display("not dropped over the board")]
    NotOverBoard,
    /// Part of the drop would fall off the board.
    #[display("drop does not fit on the board")]
    OutOfBounds,
}

/// Result of [`Game::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ActionOutcome {
    /// The action was applied.
    Applied(Transition),
    /// The action was ignored and the state is unchanged.
    Rejected(RejectReason),
}

impl From<Result<Transition, RejectReason>> for ActionOutcome {
    fn from(result: Result<Transition, RejectReason>) -> Self {
        match result {
            Ok(transition) => Self::Applied(transition),
            Err(reason) => Self::Rejected(reason),
        }
    }
}

/// A puzzle session: the single writer of [`GameState`].
///
/// All mutation goes through [`Game::apply`]; at most one drag is live at a time.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    predicate: Arc<dyn SolutionPredicate>,
}

impl Game {
    /// Creates a game with no known answer; it is never reported as solved.
    ///
    /// # Errors
    ///
    /// See [`Game::with_predicate`].
    pub fn new(pieces: Vec<Piece>, grid_size: usize) -> Result<Self, GameError> {
        Self::with_predicate(pieces, grid_size, NeverSolved)
    }

    /// Creates a game with a puzzle-specific solution check.
    ///
    /// Pieces may start on the board; their placement is validated like a commit.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::ZeroGridSize`] for an empty board,
    /// [`GameError::DuplicatePiece`] if two pieces share an id, and
    /// [`GameError::PlacementOutOfBounds`] if a placed piece does not fit.
    pub fn with_predicate(
        pieces: Vec<Piece>,
        grid_size: usize,
        predicate: impl SolutionPredicate + 'static,
    ) -> Result<Self, GameError> {
        if grid_size == 0 {
            return Err(GameError::ZeroGridSize);
        }
        let mut seen = HashSet::new();
        for piece in &pieces {
            if !seen.insert(piece.id()) {
                return Err(GameError::DuplicatePiece { id: piece.id() });
            }
            if let Some(cell) = piece.board_position()
                && cell.to_coord().fit(piece.extent(), grid_size).is_none()
            {
                return Err(GameError::PlacementOutOfBounds {
                    id: piece.id(),
                    cell,
                    grid_size,
                });
            }
        }

        let mut game = Self {
            state: GameState {
                pieces,
                grid_size,
                drag_state: None,
                game_is_solved: false,
                all_pieces_are_used: false,
            },
            predicate: Arc::new(predicate),
        };
        game.refresh_solve_status();
        Ok(game)
    }

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one action to completion.
    ///
    /// Illegal transitions are logged and leave the state untouched.
    pub fn apply(&mut self, action: Action, surface: &impl Surface) -> ActionOutcome {
        let result = match action {
            Action::DragStart {
                piece_id,
                pointer_id,
                pointer,
                pointer_offset,
            } => self.drag_start(piece_id, pointer_id, pointer, pointer_offset),
            Action::DragMove { pointer } => self.drag_move(pointer, surface),
            Action::DragNeighbors => self.drag_neighbors(surface),
            Action::DragEnd => self.drag_end(),
            Action::ShiftMove { pointer } => self.shift_move(pointer, surface),
            Action::ShiftEnd => self.shift_end(),
        };
        match &result {
            Ok(Transition::Moved) => {}
            Ok(transition) => log::debug!("{}: {transition:?}", action.name()),
            Err(reason) => log::warn!("{} rejected: {reason}", action.name()),
        }
        result.into()
    }

    /// The on-screen top-left pixel of the dragged group.
    ///
    /// A shifting group is clamped to the board rectangle; when the board cannot
    /// be measured the raw pointer-derived position is used.
    #[must_use]
    pub fn drag_origin(&self, surface: &impl Surface) -> Option<Point> {
        let drag = self.state.drag_state.as_ref()?;
        let raw = drag.pointer - drag.pointer_offset;
        if !drag.is_shifting {
            return Some(raw);
        }
        let extent = group_extent(&self.state.pieces, &drag.piece_ids);
        let board = surface.board_rect();
        Some(clamp_group_to_board(
            board.as_ref(),
            raw,
            extent,
            self.state.grid_size,
        ))
    }

    fn drag_start(
        &mut self,
        piece_id: PieceId,
        pointer_id: PointerId,
        pointer: Point,
        pointer_offset: Point,
    ) -> Result<Transition, RejectReason> {
        if self.state.drag_state.is_some() {
            return Err(RejectReason::AlreadyDragging);
        }
        if self.state.game_is_solved {
            return Err(RejectReason::PieceFrozen);
        }
        let piece = self
            .state
            .piece_mut(piece_id)
            .ok_or(RejectReason::UnknownPiece(piece_id))?;
        piece.set_group_position(Cell::new(0, 0));
        // A board piece starts over its own cell so a still pointer can arm grouping.
        let destination = piece
            .board_position()
            .map_or(Destination::None, |cell| Destination::Board(cell.to_coord()));

        self.state.drag_state = Some(DragState::new(
            piece_id,
            pointer_id,
            pointer,
            pointer_offset,
            destination,
        ));
        Ok(Transition::Started)
    }

    fn drag_move(
        &mut self,
        pointer: Point,
        surface: &impl Surface,
    ) -> Result<Transition, RejectReason> {
        let grid_size = self.state.grid_size;
        let drag = self
            .state
            .drag_state
            .as_mut()
            .ok_or(RejectReason::NoActiveDrag)?;
        if drag.is_shifting {
            return Err(RejectReason::WrongDragKind);
        }
        drag.pointer = pointer;
        drag.drag_has_moved = true;

        let top_left = pointer - drag.pointer_offset;
        let destination = match surface.hit_test(pointer) {
            Region::Board => surface
                .board_rect()
                .map_or(Destination::None, |board| {
                    Destination::Board(snap_to_cell(&board, top_left, grid_size))
                }),
            Region::Pool => Destination::Pool,
            Region::Outside => Destination::None,
        };
        if destination != drag.destination {
            log::trace!("destination {:?} -> {destination:?}", drag.destination);
        }
        drag.destination = destination;
        Ok(Transition::Moved)
    }

    fn drag_neighbors(&mut self, surface: &impl Surface) -> Result<Transition, RejectReason> {
        let GameState {
            pieces,
            grid_size,
            drag_state,
            ..
        } = &mut self.state;
        let drag = drag_state.as_mut().ok_or(RejectReason::NoActiveDrag)?;
        if drag.is_shifting {
            return Err(RejectReason::WrongDragKind);
        }
        if !drag.awaits_neighbors() {
            return Err(RejectReason::NeighborsUnavailable);
        }
        let seed = drag.piece_ids[0];
        let seed_cell = get_piece_by_id(pieces, seed)
            .and_then(Piece::board_position)
            .ok_or(RejectReason::NeighborsUnavailable)?;
        let cluster = touching_cluster(pieces, seed);
        let bounds =
            GroupBounds::of(pieces, &cluster).ok_or(RejectReason::NeighborsUnavailable)?;
        let origin = bounds.origin();

        for piece in pieces.iter_mut().filter(|p| cluster.contains(&p.id())) {
            if let Some(cell) = piece.board_position() {
                piece.set_group_position(Cell::new(cell.row - origin.row, cell.col - origin.col));
            }
        }

        // The pointer now holds the group's top-left corner, not the seed's.
        if let Some(board) = surface.board_rect() {
            let (cell_width, cell_height) = board.cell_size(*grid_size);
            let (d_row, d_col) = (seed_cell.row - origin.row, seed_cell.col - origin.col);
            drag.pointer_offset = drag.pointer_offset
                + Point::new(cell_width * cells_f32(d_col), cell_height * cells_f32(d_row));
        } else {
            log::debug!("board not measurable; keeping pointer offset");
        }

        let size = cluster.len();
        drag.destination = Destination::Board(origin.to_coord());
        drag.piece_ids = cluster;
        drag.is_shifting = true;
        Ok(Transition::Grouped { size })
    }

    fn shift_move(
        &mut self,
        pointer: Point,
        surface: &impl Surface,
    ) -> Result<Transition, RejectReason> {
        let GameState {
            pieces,
            grid_size,
            drag_state,
            ..
        } = &mut self.state;
        let drag = drag_state.as_mut().ok_or(RejectReason::NoActiveDrag)?;
        if !drag.is_shifting {
            return Err(RejectReason::WrongDragKind);
        }
        drag.pointer = pointer;
        drag.drag_has_moved = true;

        let Some(board) = surface.board_rect() else {
            log::debug!("board not measurable; keeping destination {:?}", drag.destination);
            return Ok(Transition::Moved);
        };
        let extent = group_extent(pieces, &drag.piece_ids);
        let top_left =
            clamp_group_to_board(Some(&board), pointer - drag.pointer_offset, extent, *grid_size);
        drag.destination = Destination::Board(snap_to_cell(&board, top_left, *grid_size));
        Ok(Transition::Moved)
    }

    fn drag_end(&mut self) -> Result<Transition, RejectReason> {
        let drag = self.take_drag(false)?;

        let commit = match drag.destination {
            Destination::Board(coord) => {
                let targets: Option<Vec<(PieceId, Cell)>> = drag
                    .piece_ids
                    .iter()
                    .map(|&id| {
                        let piece = self.state.piece(id)?;
                        let group = piece.group_position();
                        GridCoord::new(
                            coord.row + cells_i32(group.row),
                            coord.col + cells_i32(group.col),
                        )
                        .fit(piece.extent(), self.state.grid_size)
                        .map(|cell| (id, cell))
                    })
                    .collect();
                self.place(targets)
            }
            Destination::Pool | Destination::None => Commit::Reverted(RevertReason::NotOverBoard),
        };
        self.refresh_solve_status();
        Ok(Transition::Committed(commit))
    }

    fn shift_end(&mut self) -> Result<Transition, RejectReason> {
        let drag = self.take_drag(true)?;

        let commit = match (
            drag.destination,
            GroupBounds::of(&self.state.pieces, &drag.piece_ids),
        ) {
            (Destination::Board(coord), Some(bounds)) => {
                let origin = bounds.origin().to_coord();
                let targets = translate_group(
                    &self.state.pieces,
                    &drag.piece_ids,
                    coord.row - origin.row,
                    coord.col - origin.col,
                    self.state.grid_size,
                );
                self.place(targets)
            }
            _ => Commit::Reverted(RevertReason::NotOverBoard),
        };
        self.refresh_solve_status();
        Ok(Transition::Committed(commit))
    }

    /// Ends the drag if it is of the requested kind.
    fn take_drag(&mut self, shifting: bool) -> Result<DragState, RejectReason> {
        match self
            .state
            .drag_state
            .take_if(|drag| drag.is_shifting == shifting)
        {
            Some(drag) => Ok(drag),
            None if self.state.drag_state.is_some() => Err(RejectReason::WrongDragKind),
            None => Err(RejectReason::NoActiveDrag),
        }
    }

    fn place(&mut self, targets: Option<Vec<(PieceId, Cell)>>) -> Commit {
        let Some(targets) = targets else {
            log::info!("drop does not fit on the board; reverting");
            return Commit::Reverted(RevertReason::OutOfBounds);
        };
        for (id, cell) in targets {
            if let Some(piece) = self.state.piece_mut(id) {
                log::info!("placed piece {id} at {cell}");
                piece.set_board_position(Some(cell));
            }
        }
        Commit::Placed
    }

    fn refresh_solve_status(&mut self) {
        let was_solved = self.state.game_is_solved;
        let status = solve::detect(
            &self.state.pieces,
            self.state.grid_size,
            self.predicate.as_ref(),
        );
        self.state.all_pieces_are_used = status.all_pieces_are_used;
        self.state.game_is_solved = status.game_is_solved;
        if status.game_is_solved && !was_solved {
            log::info!("puzzle solved");
        }
    }
}

#[expect(clippy::cast_precision_loss)]
fn cells_f32(cells: usize) -> f32 {
    cells as f32
}

fn cells_i32(cells: usize) -> i32 {
    i32::try_from(cells).unwrap_or(i32::MAX)
}
