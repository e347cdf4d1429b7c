//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{CharacterRepo, RandomPort};
use crate::use_cases::battle::{BattleUseCases, ExecuteBattle};
use crate::use_cases::management::{CharacterCrud, ManagementUseCases};

/// Main application state.
///
/// Holds the repositories and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for repository ports.
pub struct Repositories {
    pub character: Arc<dyn CharacterRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub battle: BattleUseCases,
    pub management: ManagementUseCases,
}

impl App {
    pub fn new(character: Arc<dyn CharacterRepo>, random: Arc<dyn RandomPort>) -> Self {
        let battle = BattleUseCases::new(Arc::new(ExecuteBattle::new(character.clone(), random)));
        let management = ManagementUseCases::new(CharacterCrud::new(character.clone()));

        Self {
            repositories: Repositories { character },
            use_cases: UseCases { battle, management },
        }
    }
}
