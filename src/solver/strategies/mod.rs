pub mod backjumping;
pub mod backtracking;
pub mod forward_checking;
