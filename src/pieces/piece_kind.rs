/// Represents the type of a piece, `Blank` marking an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// A king piece. Capturing one ends the game.
    King,
    /// A queen piece.
    Queen,
    /// A rook piece.
    Rook,
    /// A bishop piece.
    Bishop,
    /// A knight piece, the only kind that jumps.
    Knight,
    /// A pawn piece.
    Pawn,
    /// The occupant of an empty square.
    Blank,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
        PieceKind::Blank,
    ];

    /// Material value used by board scoring.
    ///
    /// - Queen:  9.0
    /// - Rook:   5.0
    /// - Bishop: 3.0
    /// - Knight: 2.5
    /// - Pawn:   1.0
    /// - King and Blank: 0.0
    pub const fn score(self) -> f64 {
        match self {
            PieceKind::Queen => 9.0,
            PieceKind::Rook => 5.0,
            PieceKind::Bishop => 3.0,
            PieceKind::Knight => 2.5,
            PieceKind::Pawn => 1.0,
            PieceKind::King | PieceKind::Blank => 0.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "KING",
            PieceKind::Queen => "QUEEN",
            PieceKind::Rook => "ROOK",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Pawn => "PAWN",
            PieceKind::Blank => "BLANK",
        }
    }

    pub fn from_name(name: &str) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}
