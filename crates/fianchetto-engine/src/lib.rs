//! Move selection for fianchetto: evaluation, ordering and a parallel
//! iterative-deepening alpha-beta search under a time budget.

pub mod book;
pub mod config;
pub mod eval;
pub mod search;

pub use book::{BOOK_PLY_LIMIT, NoBook, OpeningBook};
pub use config::{ConfigError, Difficulty, SearchConfig, default_threads};
pub use eval::{MATE, evaluate};
pub use search::control::{Cancelled, SearchControl};
pub use search::hooks::{Progress, SearchHooks, SearchStats};
pub use search::{MATE_MARGIN, SearchResult, find_best_move, find_best_move_until};
