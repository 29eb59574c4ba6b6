pub mod formulate;
pub mod solve;
pub mod solver;
pub mod solvers;
pub mod validate;
