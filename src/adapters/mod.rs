// Adapters layer: how derived directory state reaches the outside world.

pub mod output;
