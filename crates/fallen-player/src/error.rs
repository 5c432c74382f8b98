/// Errors raised while assembling a player rig.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RigError {
    #[error("missing required dependency: {0}")]
    MissingDependency(&'static str),
}
