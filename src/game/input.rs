//! Input Capture and Recording
//!
//! The host polls its keyboard once per frame and hands the core an
//! [`InputFrame`]: a set of one-shot intents packed into bit flags.
//! Intents are latched until the next logical step consumes them.

use serde::{Serialize, Deserialize};

use crate::game::direction::Turn;

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Intents observed during a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct InputFrame {
    /// Action flags (packed bits):
    /// - Bit 0: Turn clockwise
    /// - Bit 1: Turn anticlockwise
    /// - Bit 2: Restart
    /// - Bit 3-7: Reserved
    pub flags: u8,
}

impl InputFrame {
    /// Turn clockwise flag bit
    pub const FLAG_TURN_CLOCKWISE: u8 = 0x01;

    /// Turn anticlockwise flag bit
    pub const FLAG_TURN_ANTICLOCKWISE: u8 = 0x02;

    /// Restart flag bit
    pub const FLAG_RESTART: u8 = 0x04;

    /// Create an empty input frame.
    pub const fn new() -> Self {
        Self { flags: 0 }
    }

    /// Frame carrying a single turn.
    pub const fn with_turn(turn: Turn) -> Self {
        let flags = match turn {
            Turn::Clockwise => Self::FLAG_TURN_CLOCKWISE,
            Turn::AntiClockwise => Self::FLAG_TURN_ANTICLOCKWISE,
        };
        Self { flags }
    }

    /// Frame carrying a restart request.
    pub const fn restart() -> Self {
        Self { flags: Self::FLAG_RESTART }
    }

    /// Requested turn, if any.
    ///
    /// Anticlockwise wins when both turn bits are set.
    #[inline]
    pub fn turn(&self) -> Option<Turn> {
        if self.flags & Self::FLAG_TURN_ANTICLOCKWISE != 0 {
            Some(Turn::AntiClockwise)
        } else if self.flags & Self::FLAG_TURN_CLOCKWISE != 0 {
            Some(Turn::Clockwise)
        } else {
            None
        }
    }

    /// Check if restart was pressed this frame.
    #[inline]
    pub fn restart_pressed(&self) -> bool {
        self.flags & Self::FLAG_RESTART != 0
    }

    /// Check if this is an idle frame (no input).
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.flags == 0
    }

    /// Set turn flags (clears any previous turn).
    pub fn set_turn(&mut self, turn: Option<Turn>) {
        self.flags &= !(Self::FLAG_TURN_CLOCKWISE | Self::FLAG_TURN_ANTICLOCKWISE);
        if let Some(turn) = turn {
            self.flags |= Self::with_turn(turn).flags;
        }
    }

    /// Set restart flag.
    pub fn set_restart(&mut self, pressed: bool) {
        if pressed {
            self.flags |= Self::FLAG_RESTART;
        } else {
            self.flags &= !Self::FLAG_RESTART;
        }
    }
}

/// Intents waiting for the next logical step.
///
/// A newer turn replaces an older one; restart stays set until consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInput {
    /// Turn to apply at the next step
    pub turn: Option<Turn>,
    /// Restart requested since the last step
    pub restart: bool,
}

impl PendingInput {
    /// Fold one frame of input into the latch.
    pub fn latch(&mut self, frame: InputFrame) {
        if let Some(turn) = frame.turn() {
            self.turn = Some(turn);
        }
        if frame.restart_pressed() {
            self.restart = true;
        }
    }

    /// Take the pending turn.
    pub fn take_turn(&mut self) -> Option<Turn> {
        self.turn.take()
    }

    /// Take the pending restart.
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// INPUT RECORDING
// =============================================================================

/// Single recorded input (frame + intents).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedInput {
    /// Frame number the input was fed on (1-based, as counted by the game)
    pub frame: u32,
    /// Input frame data
    pub input: InputFrame,
}

/// Complete input recording for one session.
///
/// Intents are one-shot, so only non-idle frames are stored; every frame
/// not present replays as idle.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputRecording {
    /// RNG seed used for this session
    pub rng_seed: u64,

    /// Last frame covered by the recording
    pub end_frame: u32,

    /// Non-idle inputs in frame order
    inputs: Vec<RecordedInput>,
}

impl InputRecording {
    /// Create a new recording.
    pub fn new(rng_seed: u64) -> Self {
        Self {
            rng_seed,
            end_frame: 0,
            inputs: Vec::new(),
        }
    }

    /// Record input for a frame. Frames must be recorded in increasing order.
    pub fn record(&mut self, frame: u32, input: InputFrame) {
        self.end_frame = self.end_frame.max(frame);

        if !input.is_idle() {
            self.inputs.push(RecordedInput { frame, input });
        }
    }

    /// Number of non-idle inputs stored.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Iterate over every frame from 1 to `end_frame`, idle frames included.
    pub fn replay_iter(&self) -> ReplayIterator<'_> {
        ReplayIterator {
            recording: self,
            current_frame: 1,
            input_idx: 0,
        }
    }
}

/// Iterator for replaying inputs frame-by-frame.
pub struct ReplayIterator<'a> {
    recording: &'a InputRecording,
    current_frame: u32,
    input_idx: usize,
}

impl<'a> Iterator for ReplayIterator<'a> {
    type Item = (u32, InputFrame);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_frame > self.recording.end_frame {
            return None;
        }

        let mut input = InputFrame::new();
        while let Some(recorded) = self.recording.inputs.get(self.input_idx) {
            if recorded.frame < self.current_frame {
                self.input_idx += 1;
            } else {
                if recorded.frame == self.current_frame {
                    input = recorded.input;
                    self.input_idx += 1;
                }
                break;
            }
        }

        let result = (self.current_frame, input);
        self.current_frame += 1;
        Some(result)
    }
}

// =============================================================================
// TESTS
// =============================================================================
