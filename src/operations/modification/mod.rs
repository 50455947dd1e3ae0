mod split;

pub use split::BreakAtPoint;
