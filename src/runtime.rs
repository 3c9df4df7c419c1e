//! Runtime module - headless driver for the update loop
//!
//! Owns the model and a message channel. Commands returned by `update` are
//! executed here: file IO and debounce timers run on worker threads that
//! send their result back as a message.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg, SourceMsg};
use crate::model::AppModel;
use crate::update::update;

pub struct Runtime {
    pub model: AppModel,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Set whenever a processed command asked for a redraw
    needs_redraw: bool,
}

impl Runtime {
    pub fn new(model: AppModel) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            msg_tx,
            msg_rx,
            needs_redraw: false,
        }
    }

    /// Sender for feeding messages from other threads
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Run one message through `update` and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    /// Handle every message already waiting, returning how many were handled
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    /// Handle messages as they arrive until `timeout` has elapsed
    pub fn pump_for(&mut self, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        let mut handled = 0;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.msg_rx.recv_timeout(remaining) {
                Ok(msg) => {
                    self.dispatch(msg);
                    handled += 1;
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        handled
    }

    /// Whether a redraw was requested since the last call; resets the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.needs_redraw() {
            self.needs_redraw = true;
        }

        for cmd in cmd.flatten() {
            match cmd {
                Cmd::None | Cmd::Redraw | Cmd::Batch(_) => {}
                Cmd::SaveFile { path, content } => {
                    let tx = self.msg_tx.clone();
                    std::thread::spawn(move || {
                        let result = std::fs::write(&path, content)
                            .map(|_| path)
                            .map_err(|e| e.to_string());
                        let _ = tx.send(Msg::App(AppMsg::SaveCompleted(result)));
                    });
                }
                Cmd::LoadFile { path } => {
                    let tx = self.msg_tx.clone();
                    std::thread::spawn(move || {
                        let result = std::fs::read_to_string(&path).map_err(|e| e.to_string());
                        let _ = tx.send(Msg::App(AppMsg::FileLoaded { path, result }));
                    });
                }
                Cmd::DebouncedSourceParse { revision, delay_ms } => {
                    let tx = self.msg_tx.clone();
                    std::thread::spawn(move || {
                        std::thread::sleep(Duration::from_millis(delay_ms));
                        let _ = tx.send(Msg::Source(SourceMsg::ParseReady { revision }));
                    });
                }
            }
        }
    }
}
