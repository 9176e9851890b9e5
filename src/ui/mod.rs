// animeku view layer
// HTML fragments built from manager view-models.

pub mod renderer;
