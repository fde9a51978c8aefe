use serde::{Deserialize, Serialize};

///Configuration of the packing engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PackConfig {
    ///Maximum number of placements per layer. If undefined, the engine runs until no carton fits anymore
    #[serde(default)]
    pub max_iterations: Option<usize>,
}
