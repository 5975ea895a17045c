// Registry of concurrently running games, one lock per game.

use crate::game::dice::DiceRoll;
use crate::scoring::scoring::ScoreSheet;
use crate::services::game_controller::GameController;
use crate::{DiceBingoError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub type SharedGame = Arc<Mutex<GameController>>;

#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    pub sheet: ScoreSheet,
    pub game_over: bool,
}

/// Cloneable handle; clones share the same sessions.
#[derive(Clone, Default)]
pub struct SessionManager {
    store: Arc<RwLock<HashMap<String, SharedGame>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a game and return its id. A seed makes its dice reproducible.
    pub async fn create_session(&self, seed: Option<u64>) -> String {
        let controller = match seed {
            Some(seed) => GameController::seeded(seed),
            None => GameController::new(),
        };
        let session_id = Uuid::new_v4().to_string();

        self.store
            .write()
            .await
            .insert(session_id.clone(), Arc::new(Mutex::new(controller)));
        log::info!("created session {}", session_id);
        session_id
    }

    pub async fn get_session(&self, session_id: &str) -> Result<SharedGame> {
        self.store
            .read()
            .await
            .get(session_id)
            .cloned()
            .ok_or_else(|| DiceBingoError::SessionNotFound(session_id.to_string()))
    }

    pub async fn roll(&self, session_id: &str) -> Result<DiceRoll> {
        let game = self.get_session(session_id).await?;
        let mut controller = game.lock().await;
        controller.roll().map_err(|e| {
            log::warn!("session {}: roll rejected: {}", session_id, e);
            DiceBingoError::from(e)
        })
    }

    /// Placements on one session are serialised by its mutex, so two
    /// requests can never both consume the same pending roll.
    pub async fn place(&self, session_id: &str, row: usize, col: usize) -> Result<PlacementOutcome> {
        let game = self.get_session(session_id).await?;
        let mut controller = game.lock().await;
        let sheet = match controller.place(row, col) {
            Ok(sheet) => sheet.clone(),
            Err(e) => {
                log::warn!("session {}: placement rejected: {}", session_id, e);
                return Err(e.into());
            }
        };
        Ok(PlacementOutcome {
            sheet,
            game_over: controller.is_game_over(),
        })
    }

    pub async fn score(&self, session_id: &str) -> Result<ScoreSheet> {
        let game = self.get_session(session_id).await?;
        let controller = game.lock().await;
        Ok(controller.score_sheet().clone())
    }

    pub async fn remove_session(&self, session_id: &str) -> Result<()> {
        match self.store.write().await.remove(session_id) {
            Some(_) => {
                log::info!("removed session {}", session_id);
                Ok(())
            }
            None => Err(DiceBingoError::SessionNotFound(session_id.to_string())),
        }
    }

    pub async fn session_count(&self) -> usize {
        self.store.read().await.len()
    }
}
