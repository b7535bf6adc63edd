#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployModal {
    pub url: String,
}
