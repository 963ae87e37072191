pub mod annealing;
pub mod local;
pub mod placers;
pub mod position;
pub mod tracker;
