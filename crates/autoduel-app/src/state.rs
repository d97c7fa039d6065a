//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Context};

use autoduel_core::commands::PlayerCommand;
use autoduel_core::state::CombatSnapshot;

use crate::game_loop::{self, LoopConfig};

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the combat engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds what does not exist before `start`
/// - `Arc<Mutex<...>>` holds the latest snapshot (shared with the loop thread)
pub struct AppState {
    /// Channel sender to the game loop. `None` before `start`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<CombatSnapshot>>>,
    loop_handle: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.loop_handle
            .lock()
            .map(|handle| handle.is_some())
            .unwrap_or(false)
    }

    /// Start the game loop thread if not already running.
    pub fn start(&self, config: LoopConfig) -> anyhow::Result<()> {
        let mut handle = self
            .loop_handle
            .lock()
            .map_err(|_| anyhow!("loop handle lock poisoned"))?;
        if handle.is_some() {
            bail!("simulation already running");
        }

        let (cmd_tx, join) =
            game_loop::spawn_game_loop(config, Arc::clone(&self.latest_snapshot))
                .context("failed to spawn game loop thread")?;

        let mut tx_lock = self
            .command_tx
            .lock()
            .map_err(|_| anyhow!("command sender lock poisoned"))?;
        *tx_lock = Some(cmd_tx);
        *handle = Some(join);
        Ok(())
    }

    /// Forward a player command to the simulation.
    pub fn send_command(&self, command: PlayerCommand) -> anyhow::Result<()> {
        let tx_lock = self
            .command_tx
            .lock()
            .map_err(|_| anyhow!("command sender lock poisoned"))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(GameLoopCommand::PlayerCommand(command))
                .map_err(|e| anyhow!("failed to send command: {e}")),
            None => bail!("simulation not started"),
        }
    }

    /// Clone of the latest snapshot, if any tick has run.
    pub fn snapshot(&self) -> Option<CombatSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }

    /// Stop the game loop and wait for the thread to exit.
    pub fn shutdown(&self) -> anyhow::Result<()> {
        if let Ok(mut tx_lock) = self.command_tx.lock() {
            if let Some(tx) = tx_lock.take() {
                // A disconnected loop has already stopped.
                let _ = tx.send(GameLoopCommand::Shutdown);
            }
        }

        let join = self
            .loop_handle
            .lock()
            .map_err(|_| anyhow!("loop handle lock poisoned"))?
            .take();
        if let Some(join) = join {
            join.join()
                .map_err(|_| anyhow!("game loop thread panicked"))?;
        }
        Ok(())
    }
}
