pub type NodeId = usize;
pub type EdgeId = usize;

/// Travel cost of an edge or a path. Road graphs use seconds.
pub type Cost = f64;
