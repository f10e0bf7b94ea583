pub mod zobrist;
