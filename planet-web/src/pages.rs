pub mod hello_world;
pub mod planet;
