pub mod board_scoring;
pub mod iterative_deepening;
