pub mod directory;
pub mod invoice;
pub mod project;
