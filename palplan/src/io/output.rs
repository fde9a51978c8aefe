use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::io::ext_repr::{ExtCartonResult, ExtPlan};

#[derive(Serialize, Deserialize, Clone)]
pub struct PlanOutput {
    #[serde(flatten)]
    pub plan: ExtPlan,
    pub results: Vec<ExtCartonResult>,
    pub config: PlannerConfig,
}
