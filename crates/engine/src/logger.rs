use crate::types::Move;
use std::fs::{self, File};
use std::io::Write;

/// Buffered game log. Entries accumulate in memory while the game runs
/// and are written out as `logs/<timestamp>.txt` when the game ends.
#[derive(Debug)]
pub struct GameLogger {
    log_buffer: String,
    move_count: u32,
}

impl GameLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(16 * 1024),
            move_count: 0,
        };

        logger.log("=== Game log started ===");
        logger.log(&format!(
            "Date: {}",
            chrono::Local::now().format("%m/%d/%Y %H:%M:%S")
        ));
        logger
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    /// Record an applied move under the next move number.
    pub fn log_move(&mut self, mv: Move) {
        self.move_count += 1;
        self.log(&format!("{}. {}", self.move_count, mv.notation()));
    }

    pub fn log_undo(&mut self, mv: Move) {
        if self.move_count > 0 {
            self.move_count -= 1;
        }
        self.log(&format!("undo: {}", mv.notation()));
    }

    /// Everything logged so far.
    pub fn contents(&self) -> &str {
        &self.log_buffer
    }

    /// Flush the buffer to `logs/<timestamp>.txt` and return the path.
    pub fn save_to_file(&mut self, reason: &str) -> Result<String, String> {
        fs::create_dir_all("logs")
            .map_err(|err| format!("failed to create logs directory: {}", err))?;

        let now = chrono::Local::now();
        let filename = format!("logs/{}.txt", now.format("%m_%d_%Y_%H_%M_%S"));

        self.log(&format!("Game ended: {}", reason));

        let mut file = File::create(&filename)
            .map_err(|err| format!("failed to create log file: {}", err))?;
        file.write_all(self.log_buffer.as_bytes())
            .map_err(|err| format!("failed to write log file: {}", err))?;

        Ok(filename)
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}
