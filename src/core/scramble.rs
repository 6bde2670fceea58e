// "Decoding" text effect: characters lock in left to right while the rest
// cycle through noise glyphs.

use rand::seq::SliceRandom;
use rand::Rng;

pub const NOISE_GLYPHS: &[char] = &[
    '!', '<', '>', '-', '_', '\\', '/', '[', ']', '{', '}', '—', '=', '+', '*', '^', '?', '#',
    '_', '_', '_', '_', '_', '_', '_', '_',
];

/// Characters revealed per tick.
pub const REVEAL_PER_TICK: f32 = 1.0 / 3.0;

#[derive(Clone, Debug)]
pub struct Scramble {
    target: Vec<char>,
    revealed: f32,
    finished: bool,
}

impl Scramble {
    pub fn new(text: &str) -> Self {
        Self {
            target: text.chars().collect(),
            revealed: 0.0,
            finished: false,
        }
    }

    /// Render the current frame, then advance. Returns the text to display.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        let len = self.target.len() as f32;
        let frame = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if (i as f32) < self.revealed {
                    c
                } else {
                    *NOISE_GLYPHS.choose(rng).unwrap_or(&c)
                }
            })
            .collect();
        if self.revealed >= len {
            self.finished = true;
        } else {
            self.revealed += REVEAL_PER_TICK;
        }
        frame
    }

    /// True once a frame showing the whole text unscrambled has been produced.
    pub fn is_done(&self) -> bool {
        self.finished
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }
}
