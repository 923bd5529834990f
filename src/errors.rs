//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading the deployments file
    ReadDeployments(String),
    /// Error writing the deployments file
    WriteDeployments(String),
    /// Error reading or decoding a creation bytecode artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error parsing an address supplied on the command line
    CalldataConstruction(String),
    /// A constructor argument references a unit that has not been deployed yet
    UnresolvedDependency(String),
    /// The declared reference edges admit no valid deployment order
    CyclicDependency(String),
    /// A reference or an explicit order names a unit that is not declared
    UnknownUnit(String),
    /// The external deploy call failed
    ConstructionFailed(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::UnresolvedDependency(s) => {
                write!(f, "unit `{}` referenced before deployment", s)
            }
            ScriptError::CyclicDependency(s) => {
                write!(f, "cyclic dependency among units: {}", s)
            }
            ScriptError::UnknownUnit(s) => write!(f, "unknown unit `{}`", s),
            ScriptError::ConstructionFailed(s) => write!(f, "error deploying contract: {}", s),
        }
    }
}

impl Error for ScriptError {}
