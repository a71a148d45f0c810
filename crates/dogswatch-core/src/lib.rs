pub mod config;
pub mod decision;
pub mod error;
pub mod evaluate;
pub mod input;
pub mod intent;
pub mod io;
pub mod marker;
pub mod progression;
pub mod project;

pub use error::{DogswatchError, Result};
pub use input::{given, Container, Input, NodeSnapshot};
pub use intent::Intent;
pub use marker::{Action, NodeState, UpdateAvailability};
