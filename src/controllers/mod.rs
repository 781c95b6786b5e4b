pub mod assets;
pub mod feedback;
