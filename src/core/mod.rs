pub mod boring2d;
pub mod definitions;
pub mod engine;
pub mod hyperboard;
pub mod position;
pub mod registry;
pub mod utils;
